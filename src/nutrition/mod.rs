//! Nutrition calculation module
//!
//! Handles recipe nutrition aggregation and its presentation.

pub mod aggregator;
pub mod chart;
pub mod format;
pub mod narrative;

pub use aggregator::compute_nutrition;
pub use chart::{chart_data, ChartData, ChartDataPoint};
pub use format::{format_number, format_ratio, format_weight, CookingEffect, NutritionSummary};
pub use narrative::analysis_prompt;
