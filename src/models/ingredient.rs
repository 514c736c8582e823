//! Ingredient model
//!
//! A catalog ingredient with its per-100g nutrient profile.

use serde::{Deserialize, Serialize};

use super::NutrientProfile;

/// A catalog ingredient (values per 100g)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseIngredient {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub profile: NutrientProfile,
    #[serde(default)]
    pub custom: bool,
}

impl BaseIngredient {
    pub fn new(id: impl Into<String>, name: impl Into<String>, profile: NutrientProfile) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            profile,
            custom: false,
        }
    }
}

/// Data for creating a custom ingredient
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub carbs: f64,
    #[serde(default)]
    pub fats: f64,
    #[serde(default)]
    pub proteins: f64,
    #[serde(default)]
    pub calories: f64,
}

impl IngredientCreate {
    pub fn profile(&self) -> NutrientProfile {
        NutrientProfile::new(self.carbs, self.fats, self.proteins, self.calories)
    }
}
