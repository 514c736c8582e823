//! Recipe analysis prompt
//!
//! Builds natural-language text describing a recipe and its nutrition for an
//! assistant model to comment on. Inputs are only read.

use crate::models::{BuilderLine, NutritionResult};

/// Build the analysis prompt, or `None` for a recipe with no lines
pub fn analysis_prompt(lines: &[BuilderLine], result: &NutritionResult) -> Option<String> {
    if lines.is_empty() {
        return None;
    }

    let mut prompt = String::from("I am cooking a dish with the following ingredients:\n");
    for line in lines {
        prompt.push_str(&format!("- {}: {}g\n", line.ingredient_name, line.weight_grams));
    }

    prompt.push_str("\nThe calculated nutrition per 100g (cooked) is:\n");
    prompt.push_str(&format!("- Calories: {:.0} kcal\n", result.calories_per_100g_cooked));
    prompt.push_str(&format!("- Carbs: {:.1}g (raw basis)\n", result.carbs_per_100g_before));
    prompt.push_str(&format!("- Protein: {:.1}g (raw basis)\n", result.proteins_per_100g_before));
    prompt.push_str(&format!("- Fat: {:.1}g (raw basis)\n", result.fats_per_100g_before));

    prompt.push_str(
        "\n1. Guess what this dish might be (or similar to).\n\
         2. Provide a 1-sentence comment on its nutritional balance (e.g. high protein, keto-friendly, etc).\n\
         3. Suggest one spice or herb that would improve this specific combination.\n\
         \nKeep the response concise and friendly.\n",
    );

    Some(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BaseIngredient, NutrientProfile};
    use crate::nutrition::compute_nutrition;

    fn builder_line(id: u64, name: &str, profile: NutrientProfile, weight: f64) -> BuilderLine {
        let ingredient = BaseIngredient::new(name.to_lowercase(), name, profile);
        BuilderLine::from_ingredient(id, &ingredient, weight)
    }

    #[test]
    fn test_no_prompt_for_empty_recipe() {
        assert!(analysis_prompt(&[], &NutritionResult::zero()).is_none());
    }

    #[test]
    fn test_prompt_lists_ingredients_and_values() {
        let lines = vec![
            builder_line(1, "Potato", NutrientProfile::new(17.0, 0.1, 2.0, 77.0), 400.0),
            builder_line(2, "Butter", NutrientProfile::new(0.1, 81.0, 0.9, 717.0), 20.5),
        ];
        let recipe: Vec<_> = lines.iter().map(|l| l.to_recipe_line()).collect();
        let result = compute_nutrition(&recipe, Some(350.0));

        let prompt = analysis_prompt(&lines, &result).unwrap();
        assert!(prompt.contains("- Potato: 400g\n- Butter: 20.5g\n"));
        assert!(prompt.ends_with("concise and friendly.\n"));
        assert!(prompt.contains(&format!("- Calories: {:.0} kcal", result.calories_per_100g_cooked)));
        assert!(prompt.contains(&format!("- Fat: {:.1}g (raw basis)", result.fats_per_100g_before)));
        assert!(prompt.contains("Suggest one spice or herb"));
    }
}
