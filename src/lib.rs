//! NutriCalc Library
//!
//! Recipe nutrition aggregation per 100g, raw and after cooking.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;
