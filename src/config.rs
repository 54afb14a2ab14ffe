//! Configuration types for cuotas

use crate::pricing::{CallerRole, BASE_RATE_PCT};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Pricing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Minimum finance charge in percent
    #[serde(default = "default_base_rate_pct")]
    pub base_rate_pct: Decimal,

    /// Role id allowed to grant discounts
    #[serde(default = "default_privileged_role")]
    pub privileged_role: u32,
}

fn default_base_rate_pct() -> Decimal {
    BASE_RATE_PCT
}
fn default_privileged_role() -> u32 {
    CallerRole::SUPER_ADMIN_ID
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_rate_pct: BASE_RATE_PCT,
            privileged_role: CallerRole::SUPER_ADMIN_ID,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format
    #[default]
    Pretty,
    /// JSON format for log aggregation
    Json,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Base rate must be strictly positive
    #[error("Invalid base rate: {0}%")]
    InvalidBaseRate(Decimal),
    /// Log level must not be empty
    #[error("Log level is empty")]
    EmptyLogLevel,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the pricer relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pricing.base_rate_pct <= Decimal::ZERO {
            return Err(ConfigError::InvalidBaseRate(self.pricing.base_rate_pct));
        }
        if self.telemetry.log_level.trim().is_empty() {
            return Err(ConfigError::EmptyLogLevel);
        }
        Ok(())
    }
}
