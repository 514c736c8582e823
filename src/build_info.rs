//! Build metadata embedded by `build.rs`

use std::fmt;

use serde::Serialize;

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const BUILD_NUMBER_RAW: Option<&str> = option_env!("NUTRICALC_BUILD_NUMBER");
const BUILD_TIMESTAMP_RAW: Option<&str> = option_env!("NUTRICALC_BUILD_TIMESTAMP");

/// Build number and compile time of the running binary
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            build_number: parse_build_number(BUILD_NUMBER_RAW),
            build_timestamp: BUILD_TIMESTAMP_RAW.unwrap_or("unknown"),
            description: env!("CARGO_PKG_DESCRIPTION"),
        }
    }
}

/// Missing or malformed build numbers read as 0
fn parse_build_number(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(47);
        writeln!(f, "{}", rule)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  Version: {} | Build: {}", self.version, self.build_number)?;
        writeln!(f, "  Compiled: {}", self.build_timestamp)?;
        write!(f, "{}", rule)
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    eprintln!("{}", BuildInfo::current());
}
