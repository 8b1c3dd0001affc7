use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Tunable policy for the analyzer. Everything has a sensible default;
/// a toml file can override individual fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Flat band for the MA20 slope, as a fraction of MA20 (0.0005 = 0.05%).
    pub flat_threshold: Decimal,
    /// Maximum calendar span of a requested window, in days.
    pub max_window_days: i64,
    /// Calendar days of extra history fetched before the requested start,
    /// so the averages have their trading-day lead-in.
    pub fetch_lead_days: i64,
    /// Trading days of lead-in the classifier needs before the first
    /// classified date (60 covers MA60; MA20 plus its slope need 21).
    pub min_lead_in_bars: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            flat_threshold: dec!(0.0005),
            max_window_days: 10,
            fetch_lead_days: 120,
            min_lead_in_bars: 60,
        }
    }
}

impl AnalyzerConfig {
    /// Loads from `path` when the file exists, defaults otherwise.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path))?;
        let config: Self =
            toml::from_str(&raw).with_context(|| format!("invalid config file {}", path))?;
        info!("Loaded configuration from {}", path);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.flat_threshold < Decimal::ZERO || self.flat_threshold >= Decimal::ONE {
            errors.push("flat_threshold must be in [0, 1)".to_string());
        }
        if self.max_window_days <= 0 {
            errors.push("max_window_days must be > 0".to_string());
        }
        if self.min_lead_in_bars < 21 {
            errors.push("min_lead_in_bars must be >= 21 (MA20 plus one day for its slope)".to_string());
        }
        if self.fetch_lead_days < self.min_lead_in_bars as i64 {
            errors.push("fetch_lead_days must cover min_lead_in_bars trading days".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
