use chrono::{DateTime, Duration, Utc};

use cadence_core::errors::CadenceResult;
use cadence_core::models::{Cycle, Ticket};

use crate::stats;

use super::types::{BurndownMetric, BurndownPoint, BurndownReport, BurndownSummary};

/// Computes the daily remaining-work series and completion projection for
/// one cycle.
///
/// The day grid is anchored at the cycle start: one point per calendar day
/// from the start through the final (rounded-up) day of the cycle, in
/// ascending order. A ticket counts as completed on a given day when its
/// `completed_at` falls on or before that day's instant.
pub struct BurndownCalculator;

impl BurndownCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute the full burndown report for `cycle` over `tickets`.
    ///
    /// `as_of` is the reference instant (typically "now"): days after it
    /// have no actuals, and the summary projection runs from it.
    pub fn calculate(
        &self,
        cycle: &Cycle,
        tickets: &[&Ticket],
        metric: BurndownMetric,
        as_of: DateTime<Utc>,
    ) -> CadenceResult<BurndownReport> {
        cycle.validate()?;

        let total_work: f64 = tickets.iter().map(|t| metric.work(t)).sum();
        let days_total = stats::ceil_days(cycle.start_date, cycle.end_date).max(1);
        let ideal_daily_burn = total_work / days_total as f64;

        let mut points = Vec::with_capacity(days_total as usize + 1);
        for day_index in 0..=days_total {
            let date = cycle.start_date + Duration::days(day_index);
            let ideal_remaining =
                stats::round1((total_work - ideal_daily_burn * day_index as f64).max(0.0));

            let actual_remaining = if date > as_of {
                None
            } else {
                let completed = completed_to_date(tickets, metric, date);
                Some(stats::round1(total_work - completed))
            };

            points.push(BurndownPoint {
                day_index,
                date,
                ideal_remaining,
                actual_remaining,
            });
        }

        let summary = summarize(cycle, tickets, metric, as_of, total_work);

        Ok(BurndownReport {
            cycle_id: cycle.id.clone(),
            cycle_name: cycle.name.clone(),
            metric,
            points,
            summary,
        })
    }
}

impl Default for BurndownCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Work completed on or before `date`. Completion is recognized through
/// `completed_at`; a done ticket missing its timestamp cannot be placed on
/// the time axis and is treated as not yet completed.
fn completed_to_date(tickets: &[&Ticket], metric: BurndownMetric, date: DateTime<Utc>) -> f64 {
    tickets
        .iter()
        .filter(|t| t.is_done() && t.completed_at.is_some_and(|c| c <= date))
        .map(|t| metric.work(t))
        .sum()
}

fn summarize(
    cycle: &Cycle,
    tickets: &[&Ticket],
    metric: BurndownMetric,
    as_of: DateTime<Utc>,
    total_work: f64,
) -> BurndownSummary {
    let completed_work = completed_to_date(tickets, metric, as_of);
    let remaining_work = total_work - completed_work;
    let percent_complete = stats::percent(completed_work, total_work);

    let elapsed_until = as_of.min(cycle.end_date);
    let days_elapsed = stats::ceil_days(cycle.start_date, elapsed_until).max(1);
    let velocity_per_day = stats::round1(completed_work / days_elapsed as f64);

    let days_remaining = stats::ceil_days(as_of, cycle.end_date).max(0);
    let projected_completion = if velocity_per_day > 0.0 {
        completed_work + velocity_per_day * days_remaining as f64
    } else {
        completed_work
    };

    BurndownSummary {
        total_work,
        completed_work,
        remaining_work,
        percent_complete,
        days_elapsed,
        velocity_per_day,
        days_remaining,
        projected_completion,
        on_track: projected_completion >= total_work,
    }
}
