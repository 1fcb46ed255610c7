use serde::{Deserialize, Serialize};

use crate::constants::{RISK_RATING_MAX, RISK_RATING_MIN};
use crate::errors::ValidationError;

/// Resolution status of a risk factor. Created as identified, mutated by the
/// host toward resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskStatus {
    Identified,
    Mitigating,
    Resolved,
    Accepted,
}

impl RiskStatus {
    /// All statuses in lifecycle order. Used for stable summary output.
    pub const ALL: [RiskStatus; 4] = [
        RiskStatus::Identified,
        RiskStatus::Mitigating,
        RiskStatus::Resolved,
        RiskStatus::Accepted,
    ];
}

/// A tracked delivery risk, rated on probability and impact.
///
/// The score (probability × impact) and its level are derived by the scorer,
/// never stored or independently mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub id: String,
    pub title: String,
    /// Likelihood rating, 1-5.
    pub probability: u8,
    /// Consequence rating, 1-5.
    pub impact: u8,
    pub status: RiskStatus,
}

impl RiskFactor {
    /// Reject out-of-range ratings before any computation. No clamping.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_rating("probability", self.probability)?;
        check_rating("impact", self.impact)?;
        Ok(())
    }
}

/// Validate a single probability or impact rating against the 1-5 range.
pub fn check_rating(field: &'static str, value: u8) -> Result<(), ValidationError> {
    if !(RISK_RATING_MIN..=RISK_RATING_MAX).contains(&value) {
        return Err(ValidationError::OutOfRange {
            field,
            value: value as i64,
            min: RISK_RATING_MIN as i64,
            max: RISK_RATING_MAX as i64,
        });
    }
    Ok(())
}
