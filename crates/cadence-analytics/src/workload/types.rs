use serde::{Deserialize, Serialize};

use cadence_core::config::WorkloadThresholds;

/// Categorical label derived from a member's active point load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadBucket {
    Light,
    Normal,
    Heavy,
    Overloaded,
}

impl WorkloadBucket {
    /// Classify an active point load against the configured cut points.
    /// Boundaries are inclusive and evaluated in order.
    pub fn classify(active_points: u32, thresholds: &WorkloadThresholds) -> Self {
        if active_points <= thresholds.light_max {
            Self::Light
        } else if active_points <= thresholds.normal_max {
            Self::Normal
        } else if active_points <= thresholds.heavy_max {
            Self::Heavy
        } else {
            Self::Overloaded
        }
    }

    /// Sort rank: higher is more severe.
    pub fn severity(&self) -> u8 {
        match self {
            Self::Overloaded => 3,
            Self::Heavy => 2,
            Self::Normal => 1,
            Self::Light => 0,
        }
    }
}

/// One member's load summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberWorkload {
    pub member_id: String,
    pub name: String,
    /// Points on tickets that are neither done nor blocked.
    pub active_points: u32,
    pub active_tickets: usize,
    pub assigned_points: u32,
    pub completed_points: u32,
    /// Percentage of assigned points completed; 0 when nothing is assigned.
    pub completion_rate: u32,
    pub bucket: WorkloadBucket,
}

/// Team-wide workload distribution, sorted most-loaded first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadReport {
    pub members: Vec<MemberWorkload>,
    /// Open tickets with no assignee.
    pub unassigned_open: usize,
    /// Independent alert predicates; all applicable are included.
    pub alerts: Vec<String>,
}
