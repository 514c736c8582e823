//! Recipe nutrition aggregation
//!
//! Sums ingredient contributions and normalizes them per 100g of raw mix,
//! with calorie density adjusted for the weight after cooking.

use crate::models::{NutrientProfile, NutritionResult, RecipeLine};

/// Compute aggregate nutrition for a recipe
///
/// `cooked_weight_grams` that is absent or not positive means no cooking loss
/// or gain. A recipe with zero total weight yields an all-zero result. Invalid
/// inputs (negative weights, NaN values) are not rejected and propagate
/// through the arithmetic.
pub fn compute_nutrition(recipe: &[RecipeLine], cooked_weight_grams: Option<f64>) -> NutritionResult {
    let total_raw_weight: f64 = recipe.iter().map(|line| line.weight_grams).sum();

    if total_raw_weight == 0.0 {
        return NutritionResult::zero();
    }

    let totals: NutrientProfile = recipe.iter().map(RecipeLine::amounts).sum();

    // Water is whatever mass the macros don't account for
    let total_water = total_raw_weight - totals.macro_mass();

    let per_100g = |total: f64| total / total_raw_weight * 100.0;
    let calories_per_100g_before = per_100g(totals.calories);

    let effective_cooked_weight = match cooked_weight_grams {
        Some(weight) if weight > 0.0 => weight,
        _ => total_raw_weight,
    };
    let weight_ratio = effective_cooked_weight / total_raw_weight;

    NutritionResult {
        total_raw_weight,
        carbs_per_100g_before: per_100g(totals.carbs),
        fats_per_100g_before: per_100g(totals.fats),
        proteins_per_100g_before: per_100g(totals.proteins),
        calories_per_100g_before,
        water_per_100g_before: per_100g(total_water),
        calories_per_100g_cooked: calories_per_100g_before / weight_ratio,
        weight_ratio,
        total_calories_in_pot: totals.calories,
    }
}
