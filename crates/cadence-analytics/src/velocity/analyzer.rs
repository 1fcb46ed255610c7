use cadence_core::config::VelocityConfig;

use crate::stats;

use super::types::{CycleVelocity, VelocityReport, VelocitySample, VelocityTrend};

/// Recent window must exceed the previous window by this ratio to count as
/// improving.
const TREND_IMPROVING_RATIO: f64 = 1.1;
/// Recent window must fall below the previous window by this ratio to count
/// as declining.
const TREND_DECLINING_RATIO: f64 = 0.9;

/// Completion-rate bounds for the commitment recommendations.
const COMPLETION_RATE_LOW: f64 = 80.0;
const COMPLETION_RATE_HIGH: f64 = 95.0;

/// Cycles of history below which the engine asks for more data.
const MIN_CYCLES_FOR_CONFIDENCE: usize = 3;

/// Analyzes completed-cycle velocity history.
pub struct VelocityAnalyzer {
    config: VelocityConfig,
}

impl VelocityAnalyzer {
    pub fn new(config: VelocityConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(VelocityConfig::default())
    }

    /// Analyze up to `limit` samples (most-recent-first; 0 means no cap).
    pub fn analyze(&self, samples: &[VelocitySample], limit: usize) -> VelocityReport {
        let take = if limit == 0 {
            samples.len()
        } else {
            limit.min(samples.len())
        };
        let samples = &samples[..take];

        let cycles: Vec<CycleVelocity> = samples
            .iter()
            .map(|s| CycleVelocity {
                cycle_id: s.cycle_id.clone(),
                name: s.name.clone(),
                committed_points: s.committed_points,
                completed_points: s.completed_points,
                completion_rate: stats::percent(
                    s.completed_points as f64,
                    s.committed_points as f64,
                ),
            })
            .collect();

        let completed: Vec<f64> = cycles.iter().map(|c| c.completed_points as f64).collect();

        let average_velocity = stats::mean(&completed).round() as u32;
        let trend = self.classify_trend(&completed);

        // First occurrence wins ties, so only a strictly better cycle
        // replaces the current pick.
        let best_cycle = pick(&cycles, |candidate, held| candidate > held).cloned();
        let worst_cycle = pick(&cycles, |candidate, held| candidate < held).cloned();

        let variance = stats::variance(&completed);
        let std_dev = stats::std_dev(&completed);
        let coefficient_of_variation = stats::coefficient_of_variation(&completed);
        let high_variance = coefficient_of_variation > self.config.variance_alert_threshold;

        let recommendations = self.recommend(&cycles, coefficient_of_variation, high_variance);

        VelocityReport {
            cycles,
            average_velocity,
            trend,
            best_cycle,
            worst_cycle,
            variance,
            std_dev,
            coefficient_of_variation,
            high_variance,
            recommendations,
        }
    }

    /// Compare the mean of the most recent window against the mean of the
    /// window before it. With less history than `min_history_for_trend`,
    /// the trend is always stable.
    fn classify_trend(&self, completed: &[f64]) -> VelocityTrend {
        let window = self.config.trend_window;
        if completed.len() < self.config.min_history_for_trend || completed.len() < window * 2 {
            return VelocityTrend::Stable;
        }

        let recent = stats::mean(&completed[..window]);
        let previous = stats::mean(&completed[window..window * 2]);

        if recent > previous * TREND_IMPROVING_RATIO {
            VelocityTrend::Improving
        } else if recent < previous * TREND_DECLINING_RATIO {
            VelocityTrend::Declining
        } else {
            VelocityTrend::Stable
        }
    }

    /// All applicable rules fire, in a fixed order. When none fire the
    /// velocity is declared stable and predictable.
    fn recommend(
        &self,
        cycles: &[CycleVelocity],
        coefficient_of_variation: f64,
        high_variance: bool,
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if cycles.len() < MIN_CYCLES_FOR_CONFIDENCE {
            recommendations.push(format!(
                "Only {} completed cycle(s) available; insufficient data, collect more history \
                 before adjusting commitments",
                cycles.len()
            ));
        }

        if !cycles.is_empty() {
            let rates: Vec<f64> = cycles.iter().map(|c| c.completion_rate as f64).collect();
            let avg_rate = stats::mean(&rates);

            if avg_rate < COMPLETION_RATE_LOW {
                recommendations.push(format!(
                    "Average completion rate is {:.0}%; consider committing to fewer points per \
                     cycle",
                    avg_rate
                ));
            } else if avg_rate > COMPLETION_RATE_HIGH {
                recommendations.push(format!(
                    "Average completion rate is {:.0}%; the team may have room to commit to more",
                    avg_rate
                ));
            }
        }

        if high_variance {
            recommendations.push(format!(
                "Velocity varies widely between cycles (CV {:.0}%); estimation may be \
                 inconsistent",
                coefficient_of_variation
            ));
        }

        if recommendations.is_empty() {
            recommendations.push("Velocity is stable and predictable".to_string());
        }

        recommendations
    }
}

impl Default for VelocityAnalyzer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn pick(
    cycles: &[CycleVelocity],
    replaces: impl Fn(u32, u32) -> bool,
) -> Option<&CycleVelocity> {
    let mut held: Option<&CycleVelocity> = None;
    for candidate in cycles {
        match held {
            Some(h) if !replaces(candidate.completed_points, h.completed_points) => {}
            _ => held = Some(candidate),
        }
    }
    held
}
