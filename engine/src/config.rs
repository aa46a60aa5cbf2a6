//! Configuration management for the reconciliation engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CAFE_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main engine configuration
#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    /// Current environment (development, production)
    pub environment: String,

    /// Ingredient matcher scoring configuration
    pub matcher: MatcherConfig,

    /// Monetary precision configuration
    pub costing: CostingConfig,

    /// Consumption computation configuration
    pub consumption: ConsumptionConfig,
}

/// Score weights and acceptance threshold for ingredient matching
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct MatcherConfig {
    /// Points for an exact full-string match
    pub exact_score: u32,

    /// Points for a substring match
    pub substring_score: u32,

    /// Points per candidate token found in the item name
    pub token_score: u32,

    /// Minimum total score required to accept a match
    pub min_score: u32,
}

/// Decimal places for stored/displayed cost figures
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct CostingConfig {
    /// Unit cost precision; kept finer than display precision so
    /// low-cost-per-unit ingredients do not compound rounding error
    pub unit_cost_dp: u32,

    /// Pack cost and money-total display/storage precision
    pub pack_cost_dp: u32,
}

/// Consumption computation defaults
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct ConsumptionConfig {
    /// When true, any missing ingredient fails the whole computation
    pub strict: bool,
}

impl EngineConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment =
            std::env::var("CAFE_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("matcher.exact_score", 30)?
            .set_default("matcher.substring_score", 20)?
            .set_default("matcher.token_score", 4)?
            .set_default("matcher.min_score", 12)?
            .set_default("costing.unit_cost_dp", 4)?
            .set_default("costing.pack_cost_dp", 2)?
            .set_default("consumption.strict", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CAFE_ prefix)
            .add_source(
                Environment::with_prefix("CAFE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            matcher: MatcherConfig::default(),
            costing: CostingConfig::default(),
            consumption: ConsumptionConfig::default(),
        }
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            exact_score: 30,
            substring_score: 20,
            token_score: 4,
            min_score: 12,
        }
    }
}

impl Default for CostingConfig {
    fn default() -> Self {
        Self {
            unit_cost_dp: 4,
            pack_cost_dp: 2,
        }
    }
}

impl Default for ConsumptionConfig {
    fn default() -> Self {
        Self { strict: false }
    }
}
