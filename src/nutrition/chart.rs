//! Chart series for nutrition results
//!
//! Produces the data points a renderer needs; no drawing happens here.

use serde::Serialize;

use crate::models::NutritionResult;

const COLOR_CARBS: &str = "#3b82f6";
const COLOR_FATS: &str = "#10b981";
const COLOR_PROTEINS: &str = "#ef4444";
const COLOR_WATER: &str = "#06b6d4";
const COLOR_CALORIES_RAW: &str = "#a855f7";
const COLOR_CALORIES_COOKED: &str = "#f97316";

/// A single bar in a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataPoint {
    pub name: &'static str,
    pub value: f64,
    pub fill: &'static str,
}

/// Both chart series for a recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Carbs, fats, proteins and water (g per 100g raw)
    pub macros: Vec<ChartDataPoint>,
    /// Calorie density raw vs cooked (kcal per 100g)
    pub calories: Vec<ChartDataPoint>,
}

/// Build chart series, or `None` when the recipe has no mass
pub fn chart_data(result: &NutritionResult) -> Option<ChartData> {
    if result.is_empty() {
        return None;
    }

    let point = |name, value, fill| ChartDataPoint { name, value, fill };

    Some(ChartData {
        macros: vec![
            point("Carbs", result.carbs_per_100g_before, COLOR_CARBS),
            point("Fats", result.fats_per_100g_before, COLOR_FATS),
            point("Proteins", result.proteins_per_100g_before, COLOR_PROTEINS),
            point("Water", result.water_per_100g_before, COLOR_WATER),
        ],
        calories: vec![
            point("Cals (Raw)", result.calories_per_100g_before, COLOR_CALORIES_RAW),
            point("Cals (Cooked)", result.calories_per_100g_cooked, COLOR_CALORIES_COOKED),
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutrientProfile, RecipeLine};
    use crate::nutrition::compute_nutrition;

    #[test]
    fn test_no_chart_for_empty_recipe() {
        assert!(chart_data(&NutritionResult::zero()).is_none());
    }

    #[test]
    fn test_chart_series() {
        let recipe = vec![RecipeLine::new(NutrientProfile::new(10.0, 5.0, 2.0, 100.0), 200.0)];
        let data = chart_data(&compute_nutrition(&recipe, Some(100.0))).unwrap();

        let names: Vec<&str> = data.macros.iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Carbs", "Fats", "Proteins", "Water"]);
        assert!((data.macros[3].value - 83.0).abs() < 1e-9);

        assert_eq!(data.calories.len(), 2);
        assert!((data.calories[0].value - 100.0).abs() < 1e-9);
        assert!((data.calories[1].value - 200.0).abs() < 1e-9);
        assert_eq!(data.calories[1].fill, COLOR_CALORIES_COOKED);
    }
}
