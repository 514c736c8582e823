//! NutriCalc Status Tool
//!
//! Provides runtime status information about the NutriCalc service.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::catalog::Catalog;
use crate::models::RecipeBuilder;

/// Usage instructions for AI assistants
pub const USAGE_INSTRUCTIONS: &str = r#"
# NutriCalc Usage Instructions

NutriCalc computes nutrition per 100g for a recipe built from weighted ingredients,
both for the raw mix and for the finished dish after cooking.

## Workflow

1. **Find ingredients** with `search_ingredients` (name substring, case-insensitive).
   Every catalog value is per 100g of the raw product.
2. **Missing ingredient?** Create it with `add_custom_ingredient`
   (carbs, fats, proteins in grams and calories in kcal, all per 100g).
   Pass `add_to_recipe_grams` to add it to the recipe in the same call.
3. **Add to the recipe** with `add_recipe_ingredient` (weight in grams, default 100g).
   Adding the same ingredient twice creates two separate lines.
4. **Adjust** with `update_recipe_line_weight` or `remove_recipe_line` using the `line_id`.
5. **Weigh the finished dish** and call `set_cooked_weight`. Omit the weight or pass 0 to
   assume no cooking loss or gain.
6. **Read results** with `get_recipe`.

## Reading the Results

| Field | Meaning |
|-------|---------|
| total_raw_weight | Sum of all ingredient weights (g) |
| *_per_100g_before | Carbs, fats, proteins, calories and water per 100g of raw mix |
| calories_per_100g_cooked | Calorie density of the finished dish |
| weight_ratio | Cooked weight / raw weight (< 1 means water was lost) |
| total_calories_in_pot | Total kcal in the whole recipe |

- Water is estimated as the mass not accounted for by carbs, fats and proteins. It can
  be negative if ingredient data is inconsistent.
- Only calorie density is adjusted for cooking; macros are always on a raw basis.
- An empty recipe (or all weights zero) reports every value as 0.
- JSON has no NaN or infinity. A value that is not a finite number (for example from
  overflowing inputs) is reported as `null`.

## One-off Calculations

`compute_nutrition` takes a list of lines (each with `ingredient_id` or explicit
per-100g values, plus `weight_grams`) and does not touch the working recipe.

## Recipe Commentary

`recipe_analysis_prompt` returns a prompt describing the current recipe. Answer it
yourself to give the user a short comment on the dish.
"#;

/// Service status response
#[derive(Debug, Serialize)]
pub struct NutriCalcStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub catalog_builtin_ingredients: usize,
    pub catalog_custom_ingredients: usize,
    pub recipe_lines: usize,
    pub cooked_weight_grams: Option<f64>,
}

/// Tracks service start time for status reporting
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self, catalog: &Catalog, recipe: &RecipeBuilder) -> NutriCalcStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        NutriCalcStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            catalog_builtin_ingredients: catalog.builtin_count(),
            catalog_custom_ingredients: catalog.custom_count(),
            recipe_lines: recipe.lines().len(),
            cooked_weight_grams: recipe.cooked_weight(),
        }
    }
}
