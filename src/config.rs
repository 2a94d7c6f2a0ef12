use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How vega is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VegaConvention {
    /// `S * n(d1)`, the command-line tool's historical output
    #[default]
    Unscaled,
    /// `S * n(d1) * sqrt(T)`, the derivative of the price with respect to sigma
    Scaled,
}

/// Unit of the reported theta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThetaConvention {
    #[default]
    PerYear,
    /// Annual theta divided by `days_per_year`
    PerDay,
}

/// Reporting conventions applied when assembling [`CallGreeks`](crate::CallGreeks).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub vega: VegaConvention,

    #[serde(default)]
    pub theta: ThetaConvention,

    /// Day count used by [`ThetaConvention::PerDay`]
    #[serde(default = "default_days_per_year")]
    pub days_per_year: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            vega: VegaConvention::default(),
            theta: ThetaConvention::default(),
            days_per_year: default_days_per_year(),
        }
    }
}

impl PricingConfig {
    /// Unscaled vega and annual theta; matches the command-line output bit for bit
    pub fn literal() -> Self {
        Self::default()
    }

    /// Scaled vega, annual theta
    pub fn textbook() -> Self {
        Self {
            vega: VegaConvention::Scaled,
            ..Self::default()
        }
    }

    /// Scaled vega and theta per calendar day, as most trading screens quote them
    pub fn desk() -> Self {
        Self {
            vega: VegaConvention::Scaled,
            theta: ThetaConvention::PerDay,
            ..Self::default()
        }
    }

    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: PricingConfig =
            toml::from_str(text).context("Failed to parse pricing config")?;
        config.validate()?;
        debug!(?config, "loaded pricing config");
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read pricing config {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    fn validate(&self) -> Result<()> {
        if !(self.days_per_year.is_finite() && self.days_per_year > 0.0) {
            return Err(anyhow!(
                "days_per_year must be positive and finite, got: {}",
                self.days_per_year
            ));
        }
        Ok(())
    }
}

fn default_days_per_year() -> f64 {
    365.0
}
