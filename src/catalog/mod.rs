//! Ingredient catalog
//!
//! In-memory store of built-in and user-defined ingredients.

mod seed;

use thiserror::Error;
use tracing::info;

use crate::models::{BaseIngredient, IngredientCreate};

pub use seed::builtin_ingredients;

/// Name used when a custom ingredient is created without one
pub const DEFAULT_CUSTOM_NAME: &str = "Custom Item";

/// Catalog error types
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidNutrient { field: &'static str, value: f64 },
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Ingredient catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<BaseIngredient>,
    builtin_count: usize,
    next_custom_id: u64,
}

impl Catalog {
    /// Create a catalog seeded with the built-in ingredients
    pub fn with_builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.items = builtin_ingredients();
        catalog.builtin_count = catalog.items.len();
        catalog
    }

    /// Create an empty catalog
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            builtin_count: 0,
            next_custom_id: 1,
        }
    }

    /// Get an ingredient by ID
    pub fn get(&self, id: &str) -> Option<&BaseIngredient> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Search ingredients by name (case-insensitive substring), in catalog order
    pub fn search(&self, query: &str, limit: usize) -> Vec<&BaseIngredient> {
        let needle = query.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .take(limit)
            .collect()
    }

    /// All ingredients, built-in first
    pub fn list(&self) -> &[BaseIngredient] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn builtin_count(&self) -> usize {
        self.builtin_count
    }

    pub fn custom_count(&self) -> usize {
        self.items.len() - self.builtin_count
    }

    /// Add a user-defined ingredient
    pub fn add_custom(&mut self, data: &IngredientCreate) -> CatalogResult<BaseIngredient> {
        validate_nutrient("carbs", data.carbs)?;
        validate_nutrient("fats", data.fats)?;
        validate_nutrient("proteins", data.proteins)?;
        validate_nutrient("calories", data.calories)?;

        let name = data.name.trim();
        let name = if name.is_empty() { DEFAULT_CUSTOM_NAME } else { name };

        let id = format!("custom_{}", self.next_custom_id);
        self.next_custom_id += 1;

        let mut item = BaseIngredient::new(id, name, data.profile());
        item.custom = true;
        self.items.push(item.clone());

        info!(id = %item.id, name = %item.name, "Added custom ingredient");
        Ok(item)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_builtin()
    }
}

fn validate_nutrient(field: &'static str, value: f64) -> CatalogResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CatalogError::InvalidNutrient { field, value })
    }
}
