use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{CadenceResult, ConfigError};

/// Velocity trend detection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityConfig {
    /// Cycles per comparison window. Default: 3.
    pub trend_window: usize,
    /// Minimum cycles of history before trend detection activates.
    /// Must cover two full windows. Default: 6.
    pub min_history_for_trend: usize,
    /// Coefficient of variation (percent) above which velocity is flagged
    /// as high-variance. Default: 30.
    pub variance_alert_threshold: f64,
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            trend_window: constants::DEFAULT_TREND_WINDOW,
            min_history_for_trend: constants::DEFAULT_MIN_HISTORY_FOR_TREND,
            variance_alert_threshold: constants::DEFAULT_VARIANCE_ALERT_THRESHOLD,
        }
    }
}

impl VelocityConfig {
    pub fn validate(&self) -> CadenceResult<()> {
        if self.trend_window == 0 {
            return Err(ConfigError::InvalidValue {
                field: "velocity.trend_window".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }
        if self.min_history_for_trend < self.trend_window * 2 {
            return Err(ConfigError::InvalidValue {
                field: "velocity.min_history_for_trend".to_string(),
                message: format!(
                    "must cover two trend windows (at least {})",
                    self.trend_window * 2
                ),
            }
            .into());
        }
        if !self.variance_alert_threshold.is_finite() || self.variance_alert_threshold < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "velocity.variance_alert_threshold".to_string(),
                message: "must be a non-negative number".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
