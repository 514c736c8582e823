//! Runtime configuration
//!
//! Read from environment variables at startup.

use serde::Serialize;
use thiserror::Error;

/// Default weight for a newly added recipe line (grams)
pub const DEFAULT_LINE_WEIGHT_G: f64 = 100.0;
/// Default ingredient search limit
pub const DEFAULT_SEARCH_LIMIT: usize = 20;
/// Upper bound for any search or list limit
pub const MAX_SEARCH_LIMIT: usize = 100;

const ENV_DEFAULT_WEIGHT: &str = "NUTRICALC_DEFAULT_WEIGHT_G";
const ENV_SEARCH_LIMIT: &str = "NUTRICALC_SEARCH_LIMIT";
const ENV_LOG: &str = "NUTRICALC_LOG";

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a number, got {value:?}")]
    NotANumber { name: &'static str, value: String },

    #[error("{name} must be a finite number greater than 0, got {value}")]
    OutOfRange { name: &'static str, value: f64 },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    pub default_weight_grams: f64,
    pub search_limit: usize,
    /// Extra tracing filter directive, e.g. "nutricalc=debug"
    pub log_directive: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_weight_grams: DEFAULT_LINE_WEIGHT_G,
            search_limit: DEFAULT_SEARCH_LIMIT,
            log_directive: None,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration using the given variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = non_empty(lookup(ENV_DEFAULT_WEIGHT)) {
            let weight: f64 = raw.parse().map_err(|_| ConfigError::NotANumber {
                name: ENV_DEFAULT_WEIGHT,
                value: raw.clone(),
            })?;
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ConfigError::OutOfRange {
                    name: ENV_DEFAULT_WEIGHT,
                    value: weight,
                });
            }
            config.default_weight_grams = weight;
        }

        if let Some(raw) = non_empty(lookup(ENV_SEARCH_LIMIT)) {
            let limit: usize = raw.parse().map_err(|_| ConfigError::NotANumber {
                name: ENV_SEARCH_LIMIT,
                value: raw.clone(),
            })?;
            config.search_limit = clamp_limit(limit);
        }

        config.log_directive = non_empty(lookup(ENV_LOG));

        Ok(config)
    }
}

/// Clamp a requested limit to 1..=MAX_SEARCH_LIMIT
pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_SEARCH_LIMIT)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
