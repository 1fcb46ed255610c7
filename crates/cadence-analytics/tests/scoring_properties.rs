use proptest::prelude::*;

use cadence_analytics::risk::{RiskLevel, RiskScorer};
use cadence_analytics::stats;
use cadence_analytics::velocity::{VelocityAnalyzer, VelocitySample, VelocityTrend};
use cadence_analytics::workload::WorkloadBucket;
use cadence_core::config::WorkloadThresholds;

proptest! {
    #[test]
    fn risk_score_is_always_the_product(p in 1u8..=5, i in 1u8..=5) {
        let scorer = RiskScorer::with_defaults();
        let score = scorer.score(p, i).unwrap();
        prop_assert_eq!(score, p * i);

        // Default cut points: 20/12/6, evaluated top-down.
        let expected = if score >= 20 {
            RiskLevel::Critical
        } else if score >= 12 {
            RiskLevel::High
        } else if score >= 6 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };
        prop_assert_eq!(scorer.level(score), expected);
    }

    #[test]
    fn out_of_range_ratings_never_score(p in 6u8..=50, i in 1u8..=5) {
        let scorer = RiskScorer::with_defaults();
        prop_assert!(scorer.score(p, i).is_err());
        prop_assert!(scorer.score(i, p).is_err());
        prop_assert!(scorer.score(0, i).is_err());
    }

    #[test]
    fn workload_severity_never_decreases_with_load(points in 0u32..200) {
        let thresholds = WorkloadThresholds::default();
        let here = WorkloadBucket::classify(points, &thresholds);
        let next = WorkloadBucket::classify(points + 1, &thresholds);
        prop_assert!(next.severity() >= here.severity());
    }

    #[test]
    fn variance_and_cv_are_non_negative(values in prop::collection::vec(0.0f64..500.0, 0..20)) {
        prop_assert!(stats::variance(&values) >= 0.0);
        prop_assert!(stats::coefficient_of_variation(&values) >= 0.0);
    }

    #[test]
    fn constant_point_series_has_zero_cv(value in 1u32..500, len in 1usize..15) {
        // Velocities are whole story points, so the mean is exact and the
        // deviations collapse to zero.
        let values = vec![value as f64; len];
        prop_assert_eq!(stats::variance(&values), 0.0);
        prop_assert_eq!(stats::coefficient_of_variation(&values), 0.0);
    }

    #[test]
    fn short_history_is_always_stable(completed in prop::collection::vec(0u32..100, 0..6)) {
        let samples: Vec<VelocitySample> = completed
            .iter()
            .enumerate()
            .map(|(i, &c)| VelocitySample {
                cycle_id: format!("c{i}"),
                name: format!("Sprint {i}"),
                committed_points: c,
                completed_points: c,
            })
            .collect();
        let report = VelocityAnalyzer::with_defaults().analyze(&samples, 0);
        prop_assert_eq!(report.trend, VelocityTrend::Stable);
    }
}
