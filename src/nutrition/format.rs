//! Display formatting for nutrition results
//!
//! Rounding happens only here; the aggregator returns unrounded values.

use serde::Serialize;

use crate::models::NutritionResult;

/// Format a macro or calorie value to one decimal place
pub fn format_number(value: f64) -> String {
    format!("{:.1}", value)
}

/// Format a weight in grams with no decimals
pub fn format_weight(value: f64) -> String {
    format!("{:.0}", value)
}

/// Format a weight ratio as e.g. "0.75x"
pub fn format_ratio(value: f64) -> String {
    format!("{:.2}x", value)
}

/// Direction of the mass change from cooking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CookingEffect {
    /// Water lost, nutrients concentrated
    Concentrated,
    Unchanged,
    /// Water gained, nutrients diluted
    Diluted,
}

impl CookingEffect {
    pub fn from_ratio(ratio: f64) -> Option<Self> {
        if ratio < 1.0 {
            Some(CookingEffect::Concentrated)
        } else if ratio > 1.0 {
            Some(CookingEffect::Diluted)
        } else if ratio == 1.0 {
            Some(CookingEffect::Unchanged)
        } else {
            None
        }
    }
}

/// Human-readable nutrition summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionSummary {
    pub calories_cooked_per_100g: String,
    pub calories_raw_per_100g: String,
    pub carbs_per_100g: String,
    pub fats_per_100g: String,
    pub proteins_per_100g: String,
    pub water_per_100g: String,
    pub total_raw_weight: String,
    pub weight_ratio: String,
    pub total_calories_in_pot: String,
    pub cooking_effect: Option<CookingEffect>,
}

impl NutritionSummary {
    pub fn from_result(result: &NutritionResult) -> Self {
        let cooking_effect = if result.is_empty() {
            None
        } else {
            CookingEffect::from_ratio(result.weight_ratio)
        };

        Self {
            calories_cooked_per_100g: format_number(result.calories_per_100g_cooked),
            calories_raw_per_100g: format_number(result.calories_per_100g_before),
            carbs_per_100g: format_number(result.carbs_per_100g_before),
            fats_per_100g: format_number(result.fats_per_100g_before),
            proteins_per_100g: format_number(result.proteins_per_100g_before),
            water_per_100g: format_number(result.water_per_100g_before),
            total_raw_weight: format_weight(result.total_raw_weight),
            weight_ratio: format_ratio(result.weight_ratio),
            total_calories_in_pot: format_weight(result.total_calories_in_pot),
            cooking_effect,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutrientProfile, RecipeLine};
    use crate::nutrition::compute_nutrition;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(83.0), "83.0");
        assert_eq!(format_number(12.345), "12.3");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(-20.04), "-20.0");
    }

    #[test]
    fn test_format_weight_and_ratio() {
        assert_eq!(format_weight(719.6), "720");
        assert_eq!(format_weight(200.0), "200");
        assert_eq!(format_ratio(0.5), "0.50x");
        assert_eq!(format_ratio(1.0), "1.00x");
    }

    #[test]
    fn test_cooking_effect_from_ratio() {
        assert_eq!(CookingEffect::from_ratio(0.8), Some(CookingEffect::Concentrated));
        assert_eq!(CookingEffect::from_ratio(1.0), Some(CookingEffect::Unchanged));
        assert_eq!(CookingEffect::from_ratio(2.0), Some(CookingEffect::Diluted));
        assert_eq!(CookingEffect::from_ratio(f64::NAN), None);
    }

    #[test]
    fn test_summary_for_cooked_recipe() {
        let recipe = vec![RecipeLine::new(NutrientProfile::new(10.0, 5.0, 2.0, 100.0), 200.0)];
        let summary = NutritionSummary::from_result(&compute_nutrition(&recipe, Some(100.0)));

        assert_eq!(summary.calories_cooked_per_100g, "200.0");
        assert_eq!(summary.calories_raw_per_100g, "100.0");
        assert_eq!(summary.water_per_100g, "83.0");
        assert_eq!(summary.total_raw_weight, "200");
        assert_eq!(summary.weight_ratio, "0.50x");
        assert_eq!(summary.total_calories_in_pot, "200");
        assert_eq!(summary.cooking_effect, Some(CookingEffect::Concentrated));
    }

    #[test]
    fn test_summary_for_empty_recipe() {
        let summary = NutritionSummary::from_result(&NutritionResult::zero());
        assert_eq!(summary.calories_cooked_per_100g, "0.0");
        assert_eq!(summary.total_raw_weight, "0");
        assert_eq!(summary.cooking_effect, None);
    }
}
