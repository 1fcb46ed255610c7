use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cadence_core::errors::ValidationError;
use cadence_core::models::Ticket;

/// What "remaining work" is measured in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BurndownMetric {
    /// Sum of story points. Unestimated tickets count as zero.
    #[default]
    Points,
    /// Plain ticket count.
    Count,
}

impl BurndownMetric {
    /// The amount of work one ticket contributes under this metric.
    pub fn work(&self, ticket: &Ticket) -> f64 {
        match self {
            Self::Points => ticket.points() as f64,
            Self::Count => 1.0,
        }
    }
}

impl FromStr for BurndownMetric {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "points" => Ok(Self::Points),
            "count" => Ok(Self::Count),
            other => Err(ValidationError::UnknownMetric {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for BurndownMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Points => write!(f, "points"),
            Self::Count => write!(f, "count"),
        }
    }
}

/// One calendar day on the burndown time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownPoint {
    /// Whole days since the cycle start.
    pub day_index: i64,
    pub date: DateTime<Utc>,
    /// Linear depletion line, rounded to 1 decimal.
    pub ideal_remaining: f64,
    /// Remaining work as of this date; `None` for days after the reference
    /// instant; future dates have no actuals.
    pub actual_remaining: Option<f64>,
}

/// Summary scalars for one cycle's burndown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownSummary {
    pub total_work: f64,
    pub completed_work: f64,
    pub remaining_work: f64,
    /// 0-100; defined as 0 when there is no work at all.
    pub percent_complete: u32,
    pub days_elapsed: i64,
    /// Completed work per elapsed day, rounded to 1 decimal.
    pub velocity_per_day: f64,
    pub days_remaining: i64,
    /// Completed work plus projected burn over the remaining days.
    pub projected_completion: f64,
    /// Whether the projection reaches the total by the end date.
    pub on_track: bool,
}

/// Full burndown output for one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownReport {
    pub cycle_id: String,
    pub cycle_name: String,
    pub metric: BurndownMetric,
    /// Daily points in ascending date order. Downstream consumers treat
    /// this as a time axis.
    pub points: Vec<BurndownPoint>,
    pub summary: BurndownSummary,
}
