//! Recipe line model
//!
//! A nutrient profile used at a specific weight within one recipe.

use serde::{Deserialize, Serialize};

use super::{BaseIngredient, NutrientProfile};

/// One ingredient at a given weight, as consumed by the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeLine {
    pub profile: NutrientProfile,
    pub weight_grams: f64,
}

impl RecipeLine {
    pub fn new(profile: NutrientProfile, weight_grams: f64) -> Self {
        Self {
            profile,
            weight_grams,
        }
    }

    /// Absolute nutrient amounts contributed by this line
    pub fn amounts(&self) -> NutrientProfile {
        self.profile.for_weight(self.weight_grams)
    }
}

/// A recipe line as held by the recipe builder, with ingredient identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuilderLine {
    pub line_id: u64,
    pub ingredient_id: String,
    pub ingredient_name: String,
    pub profile: NutrientProfile,
    pub weight_grams: f64,
}

impl BuilderLine {
    pub fn from_ingredient(line_id: u64, ingredient: &BaseIngredient, weight_grams: f64) -> Self {
        Self {
            line_id,
            ingredient_id: ingredient.id.clone(),
            ingredient_name: ingredient.name.clone(),
            profile: ingredient.profile,
            weight_grams,
        }
    }

    pub fn to_recipe_line(&self) -> RecipeLine {
        RecipeLine::new(self.profile, self.weight_grams)
    }
}

impl From<&BuilderLine> for RecipeLine {
    fn from(line: &BuilderLine) -> Self {
        line.to_recipe_line()
    }
}
