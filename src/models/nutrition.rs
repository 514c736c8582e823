//! Shared nutrient profile structure
//!
//! Used for catalog ingredients, recipe lines, and aggregated recipe totals.

use serde::{Deserialize, Serialize};

/// Macronutrient composition
///
/// For an ingredient this is per 100g of the substance. When produced by
/// [`NutrientProfile::scale`] for a concrete weight it holds absolute amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub carbs: f64,    // grams
    pub fats: f64,     // grams
    pub proteins: f64, // grams
    pub calories: f64, // kilocalories
}

impl NutrientProfile {
    pub fn new(carbs: f64, fats: f64, proteins: f64, calories: f64) -> Self {
        Self {
            carbs,
            fats,
            proteins,
            calories,
        }
    }

    /// Create a new profile with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every value by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            carbs: self.carbs * multiplier,
            fats: self.fats * multiplier,
            proteins: self.proteins * multiplier,
            calories: self.calories * multiplier,
        }
    }

    /// Absolute amounts contained in `weight_grams` of a substance with this per-100g profile
    pub fn for_weight(&self, weight_grams: f64) -> Self {
        self.scale(weight_grams / 100.0)
    }

    /// Add another profile to this one
    pub fn add(&self, other: &NutrientProfile) -> Self {
        Self {
            carbs: self.carbs + other.carbs,
            fats: self.fats + other.fats,
            proteins: self.proteins + other.proteins,
            calories: self.calories + other.calories,
        }
    }

    /// Combined mass of carbs, fats and proteins (grams)
    pub fn macro_mass(&self) -> f64 {
        self.carbs + self.fats + self.proteins
    }
}

impl std::ops::Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, other: NutrientProfile) -> NutrientProfile {
        NutrientProfile::add(&self, &other)
    }
}

impl std::iter::Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientProfile::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_weight_scales_per_100g() {
        let profile = NutrientProfile::new(10.0, 5.0, 2.0, 100.0);
        let amount = profile.for_weight(250.0);
        assert!((amount.carbs - 25.0).abs() < 1e-9);
        assert!((amount.fats - 12.5).abs() < 1e-9);
        assert!((amount.proteins - 5.0).abs() < 1e-9);
        assert!((amount.calories - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_sum_of_profiles() {
        let total: NutrientProfile = vec![
            NutrientProfile::new(1.0, 2.0, 3.0, 40.0),
            NutrientProfile::new(4.0, 5.0, 6.0, 60.0),
        ]
        .into_iter()
        .sum();
        assert_eq!(total, NutrientProfile::new(5.0, 7.0, 9.0, 100.0));
        assert_eq!(total.macro_mass(), 21.0);
    }

    #[test]
    fn test_sum_of_nothing_is_zero() {
        let total: NutrientProfile = std::iter::empty().sum();
        assert_eq!(total, NutrientProfile::zero());
    }

    #[test]
    fn test_for_weight_zero_and_negative() {
        let profile = NutrientProfile::new(2.0, 4.0, 6.0, 80.0);
        assert_eq!(profile.for_weight(0.0), NutrientProfile::zero());
        let negative = profile.for_weight(-50.0);
        assert!((negative.calories + 40.0).abs() < 1e-9);
        assert!((negative.proteins + 3.0).abs() < 1e-9);
    }
}
