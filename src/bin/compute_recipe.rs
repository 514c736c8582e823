//! Utility to compute recipe nutrition from a JSON file or stdin
//!
//! Usage: nutricalc-compute [recipe.json]
//!
//! Input: {"lines": [{"ingredient_id": "potato", "weight_grams": 500}], "cooked_weight_grams": 400}

use std::io::Read;

use serde::Deserialize;

use nutricalc::catalog::Catalog;
use nutricalc::tools::recipes::{compute_nutrition_for_lines, LineSpec};

#[derive(Debug, Deserialize)]
struct RecipeInput {
    lines: Vec<LineSpec>,
    #[serde(default)]
    cooked_weight_grams: Option<f64>,
}

fn read_input() -> Result<String, Box<dyn std::error::Error>> {
    match std::env::args().nth(1) {
        Some(path) if path != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input: RecipeInput = serde_json::from_str(&read_input()?)?;
    let catalog = Catalog::with_builtin();

    let response = compute_nutrition_for_lines(&catalog, &input.lines, input.cooked_weight_grams)?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
