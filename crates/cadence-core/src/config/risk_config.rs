use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{CadenceResult, ConfigError};

/// Risk level cut points (inclusive lower bounds on probability × impact).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Scores at or above this are at least "medium". Default: 6.
    pub medium_min: u8,
    /// Scores at or above this are at least "high". Default: 12.
    pub high_min: u8,
    /// Scores at or above this are "critical". Default: 20.
    pub critical_min: u8,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            medium_min: constants::DEFAULT_RISK_MEDIUM_MIN,
            high_min: constants::DEFAULT_RISK_HIGH_MIN,
            critical_min: constants::DEFAULT_RISK_CRITICAL_MIN,
        }
    }
}

impl RiskThresholds {
    /// Cut points must be strictly increasing.
    pub fn validate(&self) -> CadenceResult<()> {
        if self.medium_min >= self.high_min {
            return Err(ConfigError::InvalidValue {
                field: "risk.high_min".to_string(),
                message: format!(
                    "must be greater than medium_min ({} >= {})",
                    self.medium_min, self.high_min
                ),
            }
            .into());
        }
        if self.high_min >= self.critical_min {
            return Err(ConfigError::InvalidValue {
                field: "risk.critical_min".to_string(),
                message: format!(
                    "must be greater than high_min ({} >= {})",
                    self.high_min, self.critical_min
                ),
            }
            .into());
        }
        Ok(())
    }
}
