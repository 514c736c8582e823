//! NutriCalc Tools module
//!
//! MCP tool implementations for NutriCalc.

pub mod ingredients;
pub mod recipes;
pub mod status;
