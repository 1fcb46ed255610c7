//! Historical cycle velocity: aggregation, windowed trend detection, and
//! variance-based warnings.

mod analyzer;
mod types;

pub use analyzer::VelocityAnalyzer;
pub use types::{CycleVelocity, VelocityReport, VelocitySample, VelocityTrend};
