use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Lifecycle status of a cycle. Completed and cancelled are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleStatus {
    Planned,
    Active,
    Completed,
    Cancelled,
}

/// A fixed time-boxed work period (the product's term for a sprint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cycle {
    pub id: String,
    pub name: String,
    pub start_date: DateTime<Utc>,
    /// Invariant: strictly after `start_date`. Checked by `validate`.
    pub end_date: DateTime<Utc>,
    pub status: CycleStatus,
    /// Planned capacity in story points.
    pub capacity: Option<u32>,
    /// Story points completed, set only when the cycle completes.
    pub velocity: Option<u32>,
}

impl Cycle {
    /// Enforce the date-range invariant before any computation runs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.end_date <= self.start_date {
            return Err(ValidationError::EmptyDateRange {
                cycle_id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Terminal states: completed or cancelled.
    pub fn is_closed(&self) -> bool {
        matches!(self.status, CycleStatus::Completed | CycleStatus::Cancelled)
    }
}
