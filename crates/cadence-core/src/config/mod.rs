//! Engine configuration: threshold cut points and trend windows.
//!
//! Every threshold the analytics components compare against lives here, not
//! in the component code. Hosts override via TOML or struct literals.

mod risk_config;
mod velocity_config;
mod workload_config;

pub use risk_config::RiskThresholds;
pub use velocity_config::VelocityConfig;
pub use workload_config::WorkloadThresholds;

use serde::{Deserialize, Serialize};

use crate::errors::{CadenceResult, ConfigError};

/// Top-level analytics configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub workload: WorkloadThresholds,
    pub risk: RiskThresholds,
    pub velocity: VelocityConfig,
}

impl AnalyticsConfig {
    /// Parse a configuration from a TOML document.
    ///
    /// Missing sections and fields fall back to defaults; the parsed value
    /// is validated before being returned.
    pub fn from_toml_str(input: &str) -> CadenceResult<Self> {
        let config: Self = toml::from_str(input).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all threshold orderings.
    pub fn validate(&self) -> CadenceResult<()> {
        self.workload.validate()?;
        self.risk.validate()?;
        self.velocity.validate()?;
        Ok(())
    }
}
