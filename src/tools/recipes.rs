//! Recipe MCP Tools
//!
//! Tools for editing the working recipe and computing its nutrition.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::models::{BuilderLine, NutrientProfile, NutritionResult, RecipeBuilder, RecipeLine};
use crate::nutrition::{analysis_prompt, chart_data, compute_nutrition, ChartData, NutritionSummary};

/// Full view of the working recipe
#[derive(Debug, Serialize)]
pub struct RecipeView {
    pub lines: Vec<BuilderLine>,
    pub cooked_weight_grams: Option<f64>,
    pub nutrition: NutritionResult,
    pub summary: NutritionSummary,
    pub chart: Option<ChartData>,
}

impl RecipeView {
    pub fn from_builder(builder: &RecipeBuilder) -> Self {
        let nutrition = builder.nutrition();
        Self {
            lines: builder.lines().to_vec(),
            cooked_weight_grams: builder.cooked_weight(),
            summary: NutritionSummary::from_result(&nutrition),
            chart: chart_data(&nutrition),
            nutrition,
        }
    }
}

/// Response for add_recipe_ingredient
#[derive(Debug, Serialize)]
pub struct AddRecipeIngredientResponse {
    pub line_id: u64,
    pub ingredient_id: String,
    pub ingredient_name: String,
    pub weight_grams: f64,
    pub recipe: RecipeView,
}

/// Response for remove_recipe_line
#[derive(Debug, Serialize)]
pub struct RemoveRecipeLineResponse {
    pub removed: BuilderLine,
    pub recipe: RecipeView,
}

/// Response for clear_recipe
#[derive(Debug, Serialize)]
pub struct ClearRecipeResponse {
    pub success: bool,
    pub lines_removed: usize,
}

/// Response for compute_nutrition
#[derive(Debug, Serialize)]
pub struct ComputeNutritionResponse {
    pub nutrition: NutritionResult,
    pub summary: NutritionSummary,
    pub chart: Option<ChartData>,
}

/// Response for recipe_analysis_prompt
#[derive(Debug, Serialize)]
pub struct AnalysisPromptResponse {
    pub prompt: String,
    pub nutrition: NutritionResult,
}

/// A recipe line given either by catalog ingredient or by explicit per-100g values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LineSpec {
    pub ingredient_id: Option<String>,
    pub carbs: Option<f64>,
    pub fats: Option<f64>,
    pub proteins: Option<f64>,
    pub calories: Option<f64>,
    pub weight_grams: f64,
}

impl LineSpec {
    fn has_explicit_values(&self) -> bool {
        self.carbs.is_some() || self.fats.is_some() || self.proteins.is_some() || self.calories.is_some()
    }
}

/// Resolve line specs into aggregator input
///
/// Weights are passed through unchanged; explicit values missing from a
/// line count as zero.
pub fn resolve_lines(catalog: &Catalog, specs: &[LineSpec]) -> Result<Vec<RecipeLine>, String> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let profile = match &spec.ingredient_id {
                Some(id) => {
                    if spec.has_explicit_values() {
                        return Err(format!(
                            "Line {}: provide either ingredient_id or nutrient values, not both",
                            index
                        ));
                    }
                    catalog
                        .get(id)
                        .map(|item| item.profile)
                        .ok_or_else(|| format!("Line {}: ingredient not found with id: {}", index, id))?
                }
                None if spec.has_explicit_values() => NutrientProfile::new(
                    spec.carbs.unwrap_or(0.0),
                    spec.fats.unwrap_or(0.0),
                    spec.proteins.unwrap_or(0.0),
                    spec.calories.unwrap_or(0.0),
                ),
                None => {
                    return Err(format!(
                        "Line {}: ingredient_id or nutrient values are required",
                        index
                    ))
                }
            };
            Ok(RecipeLine::new(profile, spec.weight_grams))
        })
        .collect()
}

/// Add a catalog ingredient to the working recipe
pub fn add_recipe_ingredient(
    builder: &mut RecipeBuilder,
    catalog: &Catalog,
    ingredient_id: &str,
    weight_grams: f64,
) -> Result<AddRecipeIngredientResponse, String> {
    let ingredient = catalog
        .get(ingredient_id)
        .ok_or_else(|| format!("Ingredient not found with id: {}", ingredient_id))?;

    let line_id = builder
        .add_ingredient(ingredient, weight_grams)
        .map_err(|e| e.to_string())?;

    info!(line_id, ingredient = %ingredient.id, weight_grams, "Ingredient added to recipe");

    Ok(AddRecipeIngredientResponse {
        line_id,
        ingredient_id: ingredient.id.clone(),
        ingredient_name: ingredient.name.clone(),
        weight_grams,
        recipe: RecipeView::from_builder(builder),
    })
}

/// Change the weight of a recipe line
pub fn update_recipe_line_weight(builder: &mut RecipeBuilder, line_id: u64, weight_grams: f64) -> Result<RecipeView, String> {
    builder
        .update_weight(line_id, weight_grams)
        .map_err(|e| e.to_string())?;
    Ok(RecipeView::from_builder(builder))
}

/// Remove a line from the working recipe
pub fn remove_recipe_line(builder: &mut RecipeBuilder, line_id: u64) -> Result<RemoveRecipeLineResponse, String> {
    let removed = builder.remove_line(line_id).map_err(|e| e.to_string())?;
    info!(line_id, ingredient = %removed.ingredient_id, "Line removed from recipe");

    Ok(RemoveRecipeLineResponse {
        removed,
        recipe: RecipeView::from_builder(builder),
    })
}

/// Set or clear the weight after cooking
pub fn set_cooked_weight(builder: &mut RecipeBuilder, weight_grams: Option<f64>) -> Result<RecipeView, String> {
    builder
        .set_cooked_weight(weight_grams)
        .map_err(|e| e.to_string())?;
    Ok(RecipeView::from_builder(builder))
}

/// Remove all lines and the cooked weight
pub fn clear_recipe(builder: &mut RecipeBuilder) -> ClearRecipeResponse {
    let lines_removed = builder.lines().len();
    builder.clear();
    info!(lines_removed, "Recipe cleared");

    ClearRecipeResponse {
        success: true,
        lines_removed,
    }
}

/// Get the working recipe with its nutrition
pub fn get_recipe(builder: &RecipeBuilder) -> RecipeView {
    RecipeView::from_builder(builder)
}

/// Compute nutrition for an explicit list of lines, independent of the working recipe
pub fn compute_nutrition_for_lines(
    catalog: &Catalog,
    specs: &[LineSpec],
    cooked_weight_grams: Option<f64>,
) -> Result<ComputeNutritionResponse, String> {
    let recipe = resolve_lines(catalog, specs)?;
    let nutrition = compute_nutrition(&recipe, cooked_weight_grams);

    Ok(ComputeNutritionResponse {
        summary: NutritionSummary::from_result(&nutrition),
        chart: chart_data(&nutrition),
        nutrition,
    })
}

/// Build an analysis prompt for the working recipe
pub fn recipe_analysis_prompt(builder: &RecipeBuilder) -> Result<AnalysisPromptResponse, String> {
    let nutrition = builder.nutrition();
    let prompt = analysis_prompt(builder.lines(), &nutrition)
        .ok_or_else(|| "Recipe has no ingredients to analyze".to_string())?;

    Ok(AnalysisPromptResponse { prompt, nutrition })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_id(id: &str, weight_grams: f64) -> LineSpec {
        LineSpec {
            ingredient_id: Some(id.to_string()),
            weight_grams,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_recipe_through_tools() {
        let catalog = Catalog::with_builtin();
        let mut builder = RecipeBuilder::new();

        let added = add_recipe_ingredient(&mut builder, &catalog, "potato", 500.0).unwrap();
        assert_eq!(added.ingredient_name, "Potato");
        assert!((added.recipe.nutrition.total_calories_in_pot - 385.0).abs() < 1e-9);

        add_recipe_ingredient(&mut builder, &catalog, "butter", 20.0).unwrap();
        let view = set_cooked_weight(&mut builder, Some(400.0)).unwrap();
        assert_eq!(view.lines.len(), 2);
        assert!((view.nutrition.total_raw_weight - 520.0).abs() < 1e-9);
        assert!((view.nutrition.weight_ratio - 400.0 / 520.0).abs() < 1e-9);
        assert!(view.chart.is_some());

        let view = update_recipe_line_weight(&mut builder, added.line_id, 250.0).unwrap();
        assert!((view.nutrition.total_raw_weight - 270.0).abs() < 1e-9);

        let removed = remove_recipe_line(&mut builder, added.line_id).unwrap();
        assert_eq!(removed.removed.ingredient_id, "potato");
        assert_eq!(removed.recipe.lines.len(), 1);

        let cleared = clear_recipe(&mut builder);
        assert_eq!(cleared.lines_removed, 1);
        let view = get_recipe(&builder);
        assert_eq!(view.nutrition, NutritionResult::zero());
        assert!(view.chart.is_none());
    }

    #[test]
    fn test_unknown_ingredient_and_line() {
        let catalog = Catalog::with_builtin();
        let mut builder = RecipeBuilder::new();
        assert!(add_recipe_ingredient(&mut builder, &catalog, "dragon_fruit", 100.0)
            .unwrap_err()
            .contains("dragon_fruit"));
        assert!(update_recipe_line_weight(&mut builder, 42, 10.0).is_err());
        assert!(remove_recipe_line(&mut builder, 42).is_err());
        assert!(add_recipe_ingredient(&mut builder, &catalog, "milk", -10.0).is_err());
    }

    #[test]
    fn test_compute_for_explicit_lines() {
        let catalog = Catalog::with_builtin();
        let specs = vec![
            by_id("water", 100.0),
            LineSpec {
                carbs: Some(100.0),
                calories: Some(400.0),
                weight_grams: 100.0,
                ..Default::default()
            },
        ];
        let response = compute_nutrition_for_lines(&catalog, &specs, None).unwrap();
        assert!((response.nutrition.total_raw_weight - 200.0).abs() < 1e-9);
        assert!((response.nutrition.carbs_per_100g_before - 50.0).abs() < 1e-9);
        assert!((response.nutrition.calories_per_100g_before - 200.0).abs() < 1e-9);
        assert!((response.nutrition.water_per_100g_before - 50.0).abs() < 1e-9);
        assert_eq!(response.summary.water_per_100g, "50.0");
    }

    #[test]
    fn test_resolve_lines_errors() {
        let catalog = Catalog::with_builtin();
        assert!(resolve_lines(&catalog, &[LineSpec { weight_grams: 10.0, ..Default::default() }]).is_err());
        assert!(resolve_lines(&catalog, &[by_id("nope", 10.0)]).is_err());

        let mut both = by_id("milk", 10.0);
        both.calories = Some(1.0);
        assert!(resolve_lines(&catalog, &[both]).is_err());
    }

    #[test]
    fn test_compute_passes_weights_through() {
        let catalog = Catalog::with_builtin();
        let response = compute_nutrition_for_lines(&catalog, &[by_id("milk", 0.0)], Some(50.0)).unwrap();
        assert_eq!(response.nutrition, NutritionResult::zero());
        assert!(response.chart.is_none());
    }

    #[test]
    fn test_analysis_prompt() {
        let catalog = Catalog::with_builtin();
        let mut builder = RecipeBuilder::new();
        assert!(recipe_analysis_prompt(&builder).is_err());

        add_recipe_ingredient(&mut builder, &catalog, "chicken_breast", 300.0).unwrap();
        let response = recipe_analysis_prompt(&builder).unwrap();
        assert!(response.prompt.contains("- Chicken Breast (Raw): 300g"));
        assert!((response.nutrition.total_calories_in_pot - 360.0).abs() < 1e-9);
    }
}
