//! Ingredient MCP Tools
//!
//! Tools for searching the catalog and adding custom ingredients.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::config::clamp_limit;
use crate::models::{BaseIngredient, IngredientCreate, RecipeBuilder, RecipeError};
use crate::tools::recipes::{self, AddRecipeIngredientResponse};

/// Summary of an ingredient for list/search results
#[derive(Debug, Serialize)]
pub struct IngredientSummary {
    pub id: String,
    pub name: String,
    pub calories_per_100g: f64,
    pub custom: bool,
}

impl From<&BaseIngredient> for IngredientSummary {
    fn from(item: &BaseIngredient) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            calories_per_100g: item.profile.calories,
            custom: item.custom,
        }
    }
}

/// Response for search_ingredients
#[derive(Debug, Serialize)]
pub struct SearchIngredientsResponse {
    pub items: Vec<IngredientSummary>,
    pub total: usize,
}

/// Response for list_ingredients
#[derive(Debug, Serialize)]
pub struct ListIngredientsResponse {
    pub items: Vec<IngredientSummary>,
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

/// Response for add_custom_ingredient
#[derive(Debug, Serialize)]
pub struct AddCustomIngredientResponse {
    pub id: String,
    pub name: String,
    pub ingredient: BaseIngredient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_to_recipe: Option<AddRecipeIngredientResponse>,
}

/// Search ingredients by name
pub fn search_ingredients(catalog: &Catalog, query: &str, limit: usize) -> SearchIngredientsResponse {
    let items: Vec<IngredientSummary> = catalog
        .search(query, clamp_limit(limit))
        .into_iter()
        .map(IngredientSummary::from)
        .collect();
    let total = items.len();

    SearchIngredientsResponse { items, total }
}

/// List ingredients with pagination
pub fn list_ingredients(catalog: &Catalog, custom_only: bool, limit: usize, offset: usize) -> ListIngredientsResponse {
    let limit = clamp_limit(limit);
    let matching: Vec<&BaseIngredient> = catalog
        .list()
        .iter()
        .filter(|item| !custom_only || item.custom)
        .collect();
    let total = matching.len();

    let items = matching
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(IngredientSummary::from)
        .collect();

    ListIngredientsResponse {
        items,
        total,
        limit,
        offset,
    }
}

/// Get full details for an ingredient
pub fn get_ingredient(catalog: &Catalog, id: &str) -> Option<BaseIngredient> {
    catalog.get(id).cloned()
}

/// Add a custom ingredient to the catalog
pub fn add_custom_ingredient(catalog: &mut Catalog, data: IngredientCreate) -> Result<AddCustomIngredientResponse, String> {
    let item = catalog
        .add_custom(&data)
        .map_err(|e| format!("Failed to add ingredient: {}", e))?;

    Ok(AddCustomIngredientResponse {
        id: item.id.clone(),
        name: item.name.clone(),
        ingredient: item,
        added_to_recipe: None,
    })
}

/// Add a custom ingredient and put it straight into the working recipe
///
/// The weight is checked before the catalog changes, so a rejected call
/// leaves both untouched.
pub fn add_custom_ingredient_to_recipe(
    catalog: &mut Catalog,
    builder: &mut RecipeBuilder,
    data: IngredientCreate,
    weight_grams: f64,
) -> Result<AddCustomIngredientResponse, String> {
    if !weight_grams.is_finite() || weight_grams <= 0.0 {
        return Err(RecipeError::InvalidWeight(weight_grams).to_string());
    }

    let mut response = add_custom_ingredient(catalog, data)?;
    let added = recipes::add_recipe_ingredient(builder, catalog, &response.id, weight_grams)?;
    response.added_to_recipe = Some(added);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_returns_summaries() {
        let catalog = Catalog::with_builtin();
        let response = search_ingredients(&catalog, "rice", 20);
        assert_eq!(response.total, 1);
        assert_eq!(response.items[0].id, "rice");
        assert_eq!(response.items[0].calories_per_100g, 365.0);
    }

    #[test]
    fn test_list_paginates() {
        let catalog = Catalog::with_builtin();
        let page = list_ingredients(&catalog, false, 10, 30);
        assert_eq!(page.total, 35);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[4].id, "oil");
    }

    #[test]
    fn test_custom_only_listing() {
        let mut catalog = Catalog::with_builtin();
        assert_eq!(list_ingredients(&catalog, true, 50, 0).total, 0);

        let added = add_custom_ingredient(
            &mut catalog,
            IngredientCreate {
                name: "Pesto".to_string(),
                carbs: 6.0,
                fats: 45.0,
                proteins: 5.0,
                calories: 450.0,
            },
        )
        .unwrap();
        assert_eq!(added.id, "custom_1");

        let listed = list_ingredients(&catalog, true, 50, 0);
        assert_eq!(listed.total, 1);
        assert!(listed.items[0].custom);
        assert_eq!(get_ingredient(&catalog, "custom_1").map(|i| i.name), Some("Pesto".to_string()));
    }

    #[test]
    fn test_custom_ingredient_added_to_recipe() {
        let mut catalog = Catalog::with_builtin();
        let mut builder = RecipeBuilder::new();
        let data = IngredientCreate {
            name: "Oat Milk".to_string(),
            carbs: 6.5,
            fats: 1.5,
            proteins: 1.0,
            calories: 46.0,
        };

        let response = add_custom_ingredient_to_recipe(&mut catalog, &mut builder, data, 100.0).unwrap();
        assert_eq!(response.id, "custom_1");
        let added = response.added_to_recipe.unwrap();
        assert_eq!(added.ingredient_id, "custom_1");
        assert_eq!(builder.lines().len(), 1);
        assert!((builder.nutrition().total_calories_in_pot - 46.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_ingredient_bad_recipe_weight_changes_nothing() {
        let mut catalog = Catalog::with_builtin();
        let mut builder = RecipeBuilder::new();
        let data = IngredientCreate {
            name: "Oat Milk".to_string(),
            ..Default::default()
        };

        assert!(add_custom_ingredient_to_recipe(&mut catalog, &mut builder, data, 0.0).is_err());
        assert_eq!(catalog.custom_count(), 0);
        assert!(builder.lines().is_empty());
    }

    #[test]
    fn test_add_custom_error_message() {
        let mut catalog = Catalog::empty();
        let err = add_custom_ingredient(
            &mut catalog,
            IngredientCreate {
                calories: -5.0,
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(err.contains("calories"));
    }
}
