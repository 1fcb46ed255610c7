use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{CadenceResult, ConfigError};

/// Workload bucket cut points (inclusive upper bounds on active points).
///
/// A member with `active_points == 0` is light, `1..=normal_max` normal,
/// `normal_max+1..=heavy_max` heavy, and anything above heavy_max overloaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadThresholds {
    /// Active points at or below this are "light". Default: 0.
    pub light_max: u32,
    /// Active points at or below this are "normal". Default: 8.
    pub normal_max: u32,
    /// Active points at or below this are "heavy". Default: 13.
    pub heavy_max: u32,
    /// Unassigned open tickets above this count trigger a backlog alert.
    /// Default: 5.
    pub backlog_alert_threshold: usize,
}

impl Default for WorkloadThresholds {
    fn default() -> Self {
        Self {
            light_max: constants::DEFAULT_WORKLOAD_LIGHT_MAX,
            normal_max: constants::DEFAULT_WORKLOAD_NORMAL_MAX,
            heavy_max: constants::DEFAULT_WORKLOAD_HEAVY_MAX,
            backlog_alert_threshold: constants::DEFAULT_BACKLOG_ALERT_THRESHOLD,
        }
    }
}

impl WorkloadThresholds {
    /// Cut points must be strictly increasing.
    pub fn validate(&self) -> CadenceResult<()> {
        if self.light_max >= self.normal_max {
            return Err(ConfigError::InvalidValue {
                field: "workload.normal_max".to_string(),
                message: format!(
                    "must be greater than light_max ({} >= {})",
                    self.light_max, self.normal_max
                ),
            }
            .into());
        }
        if self.normal_max >= self.heavy_max {
            return Err(ConfigError::InvalidValue {
                field: "workload.heavy_max".to_string(),
                message: format!(
                    "must be greater than normal_max ({} >= {})",
                    self.normal_max, self.heavy_max
                ),
            }
            .into());
        }
        Ok(())
    }
}
