//! Recipe builder
//!
//! Holds the working recipe: ingredient lines in insertion order plus an
//! optional weight after cooking. Validates edits before they reach the
//! aggregator and always hands it the full current snapshot.

use thiserror::Error;
use tracing::debug;

use super::{BaseIngredient, BuilderLine, NutritionResult, RecipeLine};
use crate::nutrition::compute_nutrition;

/// Recipe builder error types
#[derive(Debug, Error, PartialEq)]
pub enum RecipeError {
    #[error("Invalid weight: {0} (must be a finite number greater than 0)")]
    InvalidWeight(f64),

    #[error("Invalid weight: {0} (must be a finite, non-negative number)")]
    InvalidLineWeight(f64),

    #[error("Invalid cooked weight: {0} (must be a finite number)")]
    InvalidCookedWeight(f64),

    #[error("Recipe line not found with id: {0}")]
    LineNotFound(u64),
}

/// Result type for recipe builder operations
pub type RecipeResult<T> = Result<T, RecipeError>;

/// The working recipe
#[derive(Debug, Clone)]
pub struct RecipeBuilder {
    lines: Vec<BuilderLine>,
    cooked_weight_grams: Option<f64>,
    next_line_id: u64,
}

impl Default for RecipeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeBuilder {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            cooked_weight_grams: None,
            next_line_id: 1,
        }
    }

    /// Add an ingredient at the given weight, returning the new line's ID
    ///
    /// The same ingredient may be added more than once; each add is a separate line.
    pub fn add_ingredient(&mut self, ingredient: &BaseIngredient, weight_grams: f64) -> RecipeResult<u64> {
        if !weight_grams.is_finite() || weight_grams <= 0.0 {
            return Err(RecipeError::InvalidWeight(weight_grams));
        }

        let line_id = self.next_line_id;
        self.next_line_id += 1;
        self.lines
            .push(BuilderLine::from_ingredient(line_id, ingredient, weight_grams));

        debug!(line_id, ingredient = %ingredient.id, weight_grams, "Added recipe line");
        Ok(line_id)
    }

    /// Change the weight of an existing line (zero is allowed)
    pub fn update_weight(&mut self, line_id: u64, weight_grams: f64) -> RecipeResult<()> {
        if !weight_grams.is_finite() || weight_grams < 0.0 {
            return Err(RecipeError::InvalidLineWeight(weight_grams));
        }

        let line = self
            .lines
            .iter_mut()
            .find(|line| line.line_id == line_id)
            .ok_or(RecipeError::LineNotFound(line_id))?;
        line.weight_grams = weight_grams;

        debug!(line_id, weight_grams, "Updated recipe line weight");
        Ok(())
    }

    /// Remove a line, returning it
    pub fn remove_line(&mut self, line_id: u64) -> RecipeResult<BuilderLine> {
        let index = self
            .lines
            .iter()
            .position(|line| line.line_id == line_id)
            .ok_or(RecipeError::LineNotFound(line_id))?;

        debug!(line_id, "Removed recipe line");
        Ok(self.lines.remove(index))
    }

    /// Set the weight after cooking; `None` or a non-positive value clears it
    pub fn set_cooked_weight(&mut self, weight_grams: Option<f64>) -> RecipeResult<()> {
        self.cooked_weight_grams = match weight_grams {
            Some(w) if !w.is_finite() => return Err(RecipeError::InvalidCookedWeight(w)),
            Some(w) if w > 0.0 => Some(w),
            _ => None,
        };
        debug!(cooked_weight_grams = ?self.cooked_weight_grams, "Set cooked weight");
        Ok(())
    }

    /// Remove all lines and the cooked weight
    pub fn clear(&mut self) {
        self.lines.clear();
        self.cooked_weight_grams = None;
    }

    pub fn lines(&self) -> &[BuilderLine] {
        &self.lines
    }

    pub fn cooked_weight(&self) -> Option<f64> {
        self.cooked_weight_grams
    }

    /// Snapshot of the lines as aggregator input
    pub fn recipe(&self) -> Vec<RecipeLine> {
        self.lines.iter().map(RecipeLine::from).collect()
    }

    /// Recompute nutrition from the current snapshot
    pub fn nutrition(&self) -> NutritionResult {
        compute_nutrition(&self.recipe(), self.cooked_weight_grams)
    }
}
