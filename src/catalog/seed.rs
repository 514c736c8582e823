//! Built-in ingredient data
//!
//! Values are per 100g of the raw product.

use crate::models::{BaseIngredient, NutrientProfile};

/// (id, name, carbs, fats, proteins, calories)
const BUILTIN_INGREDIENTS: &[(&str, &str, f64, f64, f64, f64)] = &[
    ("egg_powder", "Egg Powder", 4.0, 0.0, 48.0, 357.0),
    ("raw_eggs", "Raw Eggs", 0.36, 4.8, 6.3, 72.0),
    ("milk", "Milk", 5.0, 3.2, 3.3, 60.0),
    ("milk_32", "Milk (3.2% fat)", 4.8, 3.2, 3.3, 60.0),
    ("raw_carrots", "Raw Carrots", 9.6, 0.2, 0.9, 41.0),
    ("raw_onion", "Raw Onion", 9.34, 0.1, 1.1, 40.0),
    ("butter", "Butter", 0.1, 81.0, 0.9, 717.0),
    ("cheese", "Cheese", 1.3, 33.0, 25.0, 402.0),
    ("protein_bar", "Sugar Free Protein Bar", 20.0, 5.0, 20.0, 250.0),
    ("flour", "Flour", 76.0, 1.0, 10.0, 364.0),
    ("almond_flour", "Almond Flour", 21.0, 50.0, 21.0, 600.0),
    ("cucumbers", "Cucumbers", 3.6, 0.1, 0.7, 16.0),
    ("tomato", "Tomato", 3.9, 0.2, 0.9, 18.0),
    ("potato", "Potato", 17.0, 0.1, 2.0, 77.0),
    ("cabbage", "Cabbage", 5.8, 0.1, 1.3, 25.0),
    ("beijing_cabbage", "Beijing Cabbage", 2.2, 0.1, 1.2, 16.0),
    // Recorded with 0 kcal despite 100g carbs; kept as sourced
    ("allulose", "Allulose", 100.0, 0.0, 0.0, 0.0),
    ("greek_yogurt", "Greek Yogurt", 3.6, 0.0, 10.0, 59.0),
    ("strawberry_fd", "Strawberry (Freeze-dried)", 7.7, 0.3, 0.8, 32.0),
    ("peanuts", "Peanuts", 16.0, 49.0, 26.0, 567.0),
    ("hazelnuts", "Hazelnuts", 17.0, 61.0, 15.0, 628.0),
    ("almonds", "Almonds", 22.0, 49.0, 21.0, 576.0),
    ("bread", "Bread", 49.0, 3.2, 8.8, 265.0),
    ("brownie", "Brownie", 50.0, 15.0, 5.0, 400.0),
    ("sour_cream", "Sour Cream", 4.6, 20.0, 2.4, 214.0),
    ("taco_bread", "Taco Bread", 50.0, 5.0, 8.0, 300.0),
    ("apples", "Apples", 14.0, 0.2, 0.3, 52.0),
    ("plums", "Plums", 11.4, 0.3, 0.7, 46.0),
    ("bananas", "Bananas", 22.8, 0.3, 1.1, 89.0),
    ("peaches", "Peaches", 9.5, 0.3, 0.9, 39.0),
    ("chicken_breast", "Chicken Breast (Raw)", 0.0, 2.6, 23.0, 120.0),
    ("ground_beef", "Ground Beef (Lean)", 0.0, 10.0, 20.0, 170.0),
    ("rice", "White Rice (Raw)", 80.0, 0.7, 7.0, 365.0),
    ("water", "Water", 0.0, 0.0, 0.0, 0.0),
    ("oil", "Vegetable Oil", 0.0, 100.0, 0.0, 884.0),
];

/// Build the list of built-in ingredients
pub fn builtin_ingredients() -> Vec<BaseIngredient> {
    BUILTIN_INGREDIENTS
        .iter()
        .map(|&(id, name, carbs, fats, proteins, calories)| {
            BaseIngredient::new(id, name, NutrientProfile::new(carbs, fats, proteins, calories))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_count_and_unique_ids() {
        let items = builtin_ingredients();
        assert_eq!(items.len(), 35);
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
        assert!(items.iter().all(|i| !i.custom));
    }

    #[test]
    fn test_allulose_kept_verbatim() {
        let items = builtin_ingredients();
        let allulose = items.iter().find(|i| i.id == "allulose").unwrap();
        assert_eq!(allulose.profile, NutrientProfile::new(100.0, 0.0, 0.0, 0.0));
    }
}
