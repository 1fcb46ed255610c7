use serde::{Deserialize, Serialize};

use cadence_core::config::RiskThresholds;
use cadence_core::models::RiskStatus;

/// Ordinal severity derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Map a score (1-25) onto a level, evaluated top-down against the
    /// configured cut points.
    pub fn from_score(score: u8, thresholds: &RiskThresholds) -> Self {
        if score >= thresholds.critical_min {
            Self::Critical
        } else if score >= thresholds.high_min {
            Self::High
        } else if score >= thresholds.medium_min {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// One risk factor with its derived score and level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredRisk {
    pub id: String,
    pub title: String,
    pub status: RiskStatus,
    /// probability × impact, 1-25.
    pub score: u8,
    pub level: RiskLevel,
}

/// Counts per risk level. Fixed fields keep serialized output stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevelCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl RiskLevelCounts {
    pub fn bump(&mut self, level: RiskLevel) {
        match level {
            RiskLevel::Low => self.low += 1,
            RiskLevel::Medium => self.medium += 1,
            RiskLevel::High => self.high += 1,
            RiskLevel::Critical => self.critical += 1,
        }
    }
}

/// Counts per resolution status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskStatusCounts {
    pub identified: usize,
    pub mitigating: usize,
    pub resolved: usize,
    pub accepted: usize,
}

impl RiskStatusCounts {
    pub fn bump(&mut self, status: RiskStatus) {
        match status {
            RiskStatus::Identified => self.identified += 1,
            RiskStatus::Mitigating => self.mitigating += 1,
            RiskStatus::Resolved => self.resolved += 1,
            RiskStatus::Accepted => self.accepted += 1,
        }
    }
}

/// Aggregate view over all scored risks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub total: usize,
    pub by_level: RiskLevelCounts,
    pub by_status: RiskStatusCounts,
    /// Mean score rounded to 1 decimal; 0 with no risks.
    pub avg_score: f64,
}

/// Per-risk scores (input order) plus the aggregate summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub risks: Vec<ScoredRisk>,
    pub summary: RiskSummary,
}
