//! Nutrition result model
//!
//! Output of the aggregator. Always recomputed wholesale, never mutated.

use serde::{Deserialize, Serialize};

/// Aggregated nutrition for a recipe, per 100g raw plus cooked calorie density
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionResult {
    /// Sum of all line weights (grams)
    pub total_raw_weight: f64,
    pub carbs_per_100g_before: f64,
    pub fats_per_100g_before: f64,
    pub proteins_per_100g_before: f64,
    pub calories_per_100g_before: f64,
    /// Mass not accounted for by the three macros; may be negative
    pub water_per_100g_before: f64,
    pub calories_per_100g_cooked: f64,
    /// Cooked weight / raw weight
    pub weight_ratio: f64,
    /// Absolute kcal across the whole recipe
    pub total_calories_in_pot: f64,
}

impl NutritionResult {
    /// Result for a recipe with no mass
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.total_raw_weight == 0.0
    }
}
