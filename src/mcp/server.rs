//! NutriCalc MCP Server Implementation
//!
//! Implements the MCP server with all NutriCalc tools.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::models::{IngredientCreate, RecipeBuilder};
use crate::tools::ingredients;
use crate::tools::recipes::{self, LineSpec};
use crate::tools::status::StatusTracker;

/// NutriCalc MCP Service
#[derive(Clone)]
pub struct NutriCalcService {
    status_tracker: Arc<StatusTracker>,
    config: Arc<Config>,
    catalog: Arc<Mutex<Catalog>>,
    /// Working recipe; always lock after `catalog` when both are needed
    recipe: Arc<Mutex<RecipeBuilder>>,
    tool_router: ToolRouter<NutriCalcService>,
}

impl NutriCalcService {
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            config: Arc::new(config),
            catalog: Arc::new(Mutex::new(catalog)),
            recipe: Arc::new(Mutex::new(RecipeBuilder::new())),
            tool_router: Self::tool_router(),
        }
    }

    fn lock_catalog(&self) -> Result<MutexGuard<'_, Catalog>, McpError> {
        self.catalog
            .lock()
            .map_err(|_| McpError::internal_error("Catalog lock poisoned", None))
    }

    fn lock_recipe(&self) -> Result<MutexGuard<'_, RecipeBuilder>, McpError> {
        self.recipe
            .lock()
            .map_err(|_| McpError::internal_error("Recipe lock poisoned", None))
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

fn invalid(message: String) -> McpError {
    warn!(%message, "Rejected tool call");
    McpError::invalid_params(message, None)
}

// ============================================================================
// Ingredient Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchIngredientsParams {
    /// Name substring to search for (case-insensitive)
    pub query: String,
    /// Maximum results (defaults to server setting, max 100)
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListIngredientsParams {
    /// Only list custom ingredients (default false)
    #[serde(default)]
    pub custom_only: bool,
    /// Maximum results (default 50, max 100)
    #[serde(default = "default_list_limit")]
    pub limit: usize,
    /// Offset for pagination (default 0)
    #[serde(default)]
    pub offset: usize,
}

fn default_list_limit() -> usize { 50 }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetIngredientParams {
    /// Ingredient ID (e.g., "butter", "custom_1")
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddCustomIngredientParams {
    /// Product name (defaults to "Custom Item")
    #[serde(default)]
    pub name: String,
    /// Carbohydrates in grams per 100g
    #[serde(default)]
    pub carbs: f64,
    /// Fats in grams per 100g
    #[serde(default)]
    pub fats: f64,
    /// Proteins in grams per 100g
    #[serde(default)]
    pub proteins: f64,
    /// Energy in kcal per 100g
    #[serde(default)]
    pub calories: f64,
    /// If set, also add the new ingredient to the working recipe at this weight (grams)
    pub add_to_recipe_grams: Option<f64>,
}

// ============================================================================
// Recipe Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddRecipeIngredientParams {
    /// Ingredient ID from the catalog
    pub ingredient_id: String,
    /// Weight in grams (defaults to server setting, normally 100)
    pub weight_grams: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateRecipeLineWeightParams {
    /// Recipe line ID
    pub line_id: u64,
    /// New weight in grams (0 allowed)
    pub weight_grams: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveRecipeLineParams {
    /// Recipe line ID to remove
    pub line_id: u64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetCookedWeightParams {
    /// Weight of the finished dish in grams; omit or 0 to use the raw weight
    pub weight_grams: Option<f64>,
}

/// Single line for compute_nutrition
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComputeLineParam {
    /// Catalog ingredient ID (provide either this or nutrient values)
    pub ingredient_id: Option<String>,
    /// Carbohydrates in grams per 100g
    pub carbs: Option<f64>,
    /// Fats in grams per 100g
    pub fats: Option<f64>,
    /// Proteins in grams per 100g
    pub proteins: Option<f64>,
    /// Energy in kcal per 100g
    pub calories: Option<f64>,
    /// Weight used in the recipe (grams)
    pub weight_grams: f64,
}

impl From<ComputeLineParam> for LineSpec {
    fn from(p: ComputeLineParam) -> Self {
        LineSpec {
            ingredient_id: p.ingredient_id,
            carbs: p.carbs,
            fats: p.fats,
            proteins: p.proteins,
            calories: p.calories,
            weight_grams: p.weight_grams,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ComputeNutritionParams {
    /// Recipe lines
    pub lines: Vec<ComputeLineParam>,
    /// Weight after cooking in grams (optional)
    pub cooked_weight_grams: Option<f64>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutriCalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriCalc service including build info, uptime, catalog size, and working recipe size")]
    fn nutricalc_status(&self) -> Result<CallToolResult, McpError> {
        let catalog = self.lock_catalog()?;
        let recipe = self.lock_recipe()?;
        json_result(&self.status_tracker.get_status(&catalog, &recipe))
    }

    #[tool(description = "Get step-by-step instructions for building a recipe and reading its nutrition. Call this when unsure how to use the NutriCalc tools.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Ingredients ---

    #[tool(description = "Search catalog ingredients by name (values are per 100g)")]
    fn search_ingredients(&self, Parameters(p): Parameters<SearchIngredientsParams>) -> Result<CallToolResult, McpError> {
        let limit = p.limit.unwrap_or(self.config.search_limit);
        let catalog = self.lock_catalog()?;
        json_result(&ingredients::search_ingredients(&catalog, &p.query, limit))
    }

    #[tool(description = "List catalog ingredients with pagination, optionally only custom ones")]
    fn list_ingredients(&self, Parameters(p): Parameters<ListIngredientsParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.lock_catalog()?;
        json_result(&ingredients::list_ingredients(&catalog, p.custom_only, p.limit, p.offset))
    }

    #[tool(description = "Get full per-100g nutrient values for an ingredient")]
    fn get_ingredient(&self, Parameters(p): Parameters<GetIngredientParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.lock_catalog()?;
        match ingredients::get_ingredient(&catalog, &p.id) {
            Some(item) => json_result(&item),
            None => json_result(&serde_json::json!({ "error": "Ingredient not found", "id": p.id })),
        }
    }

    #[tool(description = "Create a custom ingredient from per-100g values (carbs, fats, proteins in g; calories in kcal). Set add_to_recipe_grams to also add it to the working recipe.")]
    fn add_custom_ingredient(&self, Parameters(p): Parameters<AddCustomIngredientParams>) -> Result<CallToolResult, McpError> {
        let data = IngredientCreate {
            name: p.name, carbs: p.carbs, fats: p.fats, proteins: p.proteins, calories: p.calories,
        };
        let mut catalog = self.lock_catalog()?;
        let result = match p.add_to_recipe_grams {
            Some(weight) => {
                let mut recipe = self.lock_recipe()?;
                ingredients::add_custom_ingredient_to_recipe(&mut catalog, &mut recipe, data, weight)
            }
            None => ingredients::add_custom_ingredient(&mut catalog, data),
        }
        .map_err(invalid)?;
        json_result(&result)
    }

    // --- Working Recipe ---

    #[tool(description = "Add a catalog ingredient to the working recipe at a weight in grams. Returns the new line_id and updated nutrition.")]
    fn add_recipe_ingredient(&self, Parameters(p): Parameters<AddRecipeIngredientParams>) -> Result<CallToolResult, McpError> {
        let weight = p.weight_grams.unwrap_or(self.config.default_weight_grams);
        let catalog = self.lock_catalog()?;
        let mut recipe = self.lock_recipe()?;
        let result = recipes::add_recipe_ingredient(&mut recipe, &catalog, &p.ingredient_id, weight)
            .map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Change the weight (grams) of a line in the working recipe")]
    fn update_recipe_line_weight(&self, Parameters(p): Parameters<UpdateRecipeLineWeightParams>) -> Result<CallToolResult, McpError> {
        let mut recipe = self.lock_recipe()?;
        let result = recipes::update_recipe_line_weight(&mut recipe, p.line_id, p.weight_grams)
            .map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Remove a line from the working recipe")]
    fn remove_recipe_line(&self, Parameters(p): Parameters<RemoveRecipeLineParams>) -> Result<CallToolResult, McpError> {
        let mut recipe = self.lock_recipe()?;
        let result = recipes::remove_recipe_line(&mut recipe, p.line_id).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Set the weight of the finished dish after cooking (grams). Omit or pass 0 to assume no cooking loss or gain.")]
    fn set_cooked_weight(&self, Parameters(p): Parameters<SetCookedWeightParams>) -> Result<CallToolResult, McpError> {
        let mut recipe = self.lock_recipe()?;
        let result = recipes::set_cooked_weight(&mut recipe, p.weight_grams).map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Remove all lines and the cooked weight from the working recipe")]
    fn clear_recipe(&self) -> Result<CallToolResult, McpError> {
        let mut recipe = self.lock_recipe()?;
        json_result(&recipes::clear_recipe(&mut recipe))
    }

    #[tool(description = "Get the working recipe with nutrition per 100g (raw and cooked), formatted summary, and chart series")]
    fn get_recipe(&self) -> Result<CallToolResult, McpError> {
        let recipe = self.lock_recipe()?;
        json_result(&recipes::get_recipe(&recipe))
    }

    #[tool(description = "Compute nutrition for an explicit list of lines without changing the working recipe. Each line needs ingredient_id or per-100g values, plus weight_grams.")]
    fn compute_nutrition(&self, Parameters(p): Parameters<ComputeNutritionParams>) -> Result<CallToolResult, McpError> {
        let specs: Vec<LineSpec> = p.lines.into_iter().map(LineSpec::from).collect();
        let catalog = self.lock_catalog()?;
        let result = recipes::compute_nutrition_for_lines(&catalog, &specs, p.cooked_weight_grams)
            .map_err(invalid)?;
        json_result(&result)
    }

    #[tool(description = "Get a prompt describing the working recipe and its nutrition. Answer it to comment on the dish: what it resembles, its nutritional balance, and a spice or herb to add.")]
    fn recipe_analysis_prompt(&self) -> Result<CallToolResult, McpError> {
        let recipe = self.lock_recipe()?;
        let result = recipes::recipe_analysis_prompt(&recipe).map_err(invalid)?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutriCalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutricalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriCalc".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriCalc - Recipe nutrition per 100g, raw and after cooking. \
                 IMPORTANT: Call usage_instructions first if unsure. \
                 Ingredients: search_ingredients/list_ingredients/get_ingredient/add_custom_ingredient. \
                 Working recipe: add_recipe_ingredient, update_recipe_line_weight, remove_recipe_line, \
                 set_cooked_weight, clear_recipe, get_recipe. \
                 One-off: compute_nutrition. Commentary: recipe_analysis_prompt. \
                 Status: nutricalc_status."
                    .into(),
            ),
        }
    }
}
