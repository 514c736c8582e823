//! Data models
//!
//! Ingredient profiles, recipe lines, the working recipe, and nutrition results.

mod ingredient;
mod nutrition;
mod nutrition_result;
mod recipe;
mod recipe_line;

pub use ingredient::{BaseIngredient, IngredientCreate};
pub use nutrition::NutrientProfile;
pub use nutrition_result::NutritionResult;
pub use recipe::{RecipeBuilder, RecipeError, RecipeResult};
pub use recipe_line::{BuilderLine, RecipeLine};
