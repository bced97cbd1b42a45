//! Tunable constants for building a sample context
//!
//! Defaults reproduce the classic behaviour. They can be overridden from a TOML
//! document with the following structure:
//!
//! ```toml
//! min_samples = 20
//! skew_epsilon = 1e-12
//! bandwidth_factor = 1.06
//! ```
//!
//! Missing keys keep their default value.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Smallest sample count for which quantile and density estimates are computed.
pub const MIN_SAMPLES: usize = 10;

/// Guard added to the standard deviation in Pearson skewness and z-scores.
pub const DEFAULT_SKEW_EPSILON: f64 = 1e-15;

/// Multiplier in the Silverman-style KDE bandwidth rule.
pub const DEFAULT_BANDWIDTH_FACTOR: f64 = 0.9;

/// Construction parameters for a [`SampleContext`](crate::SampleContext)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StatsConfig {
    /// Minimum number of samples; never lower than [`MIN_SAMPLES`]
    pub min_samples: usize,
    /// Epsilon added to `std` before dividing in Pearson skewness and z-score
    pub skew_epsilon: f64,
    /// Factor `f` in `h = f * sigma * n^(-1/5)`
    pub bandwidth_factor: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            min_samples: MIN_SAMPLES,
            skew_epsilon: DEFAULT_SKEW_EPSILON,
            bandwidth_factor: DEFAULT_BANDWIDTH_FACTOR,
        }
    }
}

impl StatsConfig {
    /// Parse and validate a configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: StatsConfig = toml::from_str(content)?;
        config.validate()?;
        tracing::trace!(?config, "Loaded stats configuration");
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check every field against its allowed range.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.min_samples < MIN_SAMPLES {
            return Err(ConfigError::MinSamplesTooLow {
                value: self.min_samples,
                floor: MIN_SAMPLES,
            });
        }

        if !self.skew_epsilon.is_finite() || self.skew_epsilon < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "skew_epsilon",
                expected: "finite and non-negative",
                value: self.skew_epsilon,
            });
        }

        if !self.bandwidth_factor.is_finite() || self.bandwidth_factor <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "bandwidth_factor",
                expected: "finite and positive",
                value: self.bandwidth_factor,
            });
        }

        Ok(())
    }
}
