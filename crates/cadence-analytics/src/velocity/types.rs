use serde::{Deserialize, Serialize};

/// One closed cycle's commitment and outcome, as supplied by the caller.
/// Sample lists are ordered most-recent-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VelocitySample {
    pub cycle_id: String,
    pub name: String,
    pub committed_points: u32,
    pub completed_points: u32,
}

/// A sample enriched with its completion rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleVelocity {
    pub cycle_id: String,
    pub name: String,
    pub committed_points: u32,
    pub completed_points: u32,
    /// Percentage of committed points completed; 0 when nothing was
    /// committed. Can exceed 100 when a cycle over-delivered.
    pub completion_rate: u32,
}

/// Direction of the recent-vs-previous window comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VelocityTrend {
    Improving,
    Declining,
    Stable,
}

/// Aggregated velocity analysis over the retrieved history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityReport {
    /// Analyzed cycles, most recent first.
    pub cycles: Vec<CycleVelocity>,
    /// Mean completed points, rounded to the nearest whole point.
    pub average_velocity: u32,
    pub trend: VelocityTrend,
    /// Highest completed points; first occurrence wins ties.
    pub best_cycle: Option<CycleVelocity>,
    /// Lowest completed points; first occurrence wins ties.
    pub worst_cycle: Option<CycleVelocity>,
    /// Population variance of completed points.
    pub variance: f64,
    pub std_dev: f64,
    /// `std_dev / mean × 100`; 0 when the mean is 0.
    pub coefficient_of_variation: f64,
    pub high_variance: bool,
    /// Rule-based, cumulative, fixed order.
    pub recommendations: Vec<String>,
}
