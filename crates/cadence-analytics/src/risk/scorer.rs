use cadence_core::config::RiskThresholds;
use cadence_core::errors::{CadenceResult, ValidationError};
use cadence_core::models::{check_rating, RiskFactor};

use crate::stats;

use super::types::{RiskLevel, RiskLevelCounts, RiskReport, RiskStatusCounts, RiskSummary, ScoredRisk};

/// Scores risk factors as probability × impact and buckets the result.
pub struct RiskScorer {
    thresholds: RiskThresholds,
}

impl RiskScorer {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_defaults() -> Self {
        Self::new(RiskThresholds::default())
    }

    /// Score a single probability/impact pair.
    ///
    /// Both ratings must be 1-5; out-of-range input is rejected, never
    /// clamped.
    pub fn score(&self, probability: u8, impact: u8) -> Result<u8, ValidationError> {
        check_rating("probability", probability)?;
        check_rating("impact", impact)?;
        Ok(probability * impact)
    }

    /// The level for a given score under this scorer's cut points.
    pub fn level(&self, score: u8) -> RiskLevel {
        RiskLevel::from_score(score, &self.thresholds)
    }

    /// Score every risk factor and build the aggregate summary.
    ///
    /// All factors are validated before any is scored; the first bad one
    /// rejects the whole call.
    pub fn assess(&self, risks: &[RiskFactor]) -> CadenceResult<RiskReport> {
        for risk in risks {
            risk.validate()?;
        }

        let mut by_level = RiskLevelCounts::default();
        let mut by_status = RiskStatusCounts::default();
        let mut scores = Vec::with_capacity(risks.len());

        let scored: Vec<ScoredRisk> = risks
            .iter()
            .map(|r| {
                let score = r.probability * r.impact;
                let level = self.level(score);
                by_level.bump(level);
                by_status.bump(r.status);
                scores.push(score as f64);
                ScoredRisk {
                    id: r.id.clone(),
                    title: r.title.clone(),
                    status: r.status,
                    score,
                    level,
                }
            })
            .collect();

        let summary = RiskSummary {
            total: scored.len(),
            by_level,
            by_status,
            avg_score: stats::round1(stats::mean(&scores)),
        };

        Ok(RiskReport {
            risks: scored,
            summary,
        })
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self::with_defaults()
    }
}
