//! Probability × impact risk scoring and level bucketing.

mod scorer;
mod types;

pub use scorer::RiskScorer;
pub use types::{RiskLevel, RiskLevelCounts, RiskReport, RiskStatusCounts, RiskSummary, ScoredRisk};
