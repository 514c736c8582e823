//! NutriCalc
//!
//! An MCP server for recipe nutrition aggregation.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use nutricalc::build_info;
use nutricalc::catalog::Catalog;
use nutricalc::config::Config;
use nutricalc::mcp::NutriCalcService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Initialize logging (output to stderr to not interfere with MCP stdio)
    let mut filter = EnvFilter::from_default_env().add_directive("nutricalc=info".parse()?);
    if let Some(directive) = &config.log_directive {
        filter = filter.add_directive(directive.parse()?);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let catalog = Catalog::with_builtin();
    eprintln!(
        "Catalog: {} built-in ingredients | Default weight: {}g | Search limit: {}",
        catalog.builtin_count(),
        config.default_weight_grams,
        config.search_limit
    );

    let service = NutriCalcService::new(config, catalog);

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
