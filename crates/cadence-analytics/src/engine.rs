//! The orchestrating facade: one snapshot in, one combined analytics
//! result out.
//!
//! Pure orchestration: the engine holds configuration only, performs no
//! I/O, and keeps no state between calls. Burndown reports for independent
//! cycles are computed in parallel; output order follows input order.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use cadence_core::config::AnalyticsConfig;
use cadence_core::errors::CadenceResult;
use cadence_core::models::{Cycle, CycleStatus, DeliverySnapshot, Ticket, TicketStatus};

use crate::burndown::{BurndownCalculator, BurndownMetric, BurndownReport};
use crate::risk::{RiskReport, RiskScorer};
use crate::velocity::{VelocityAnalyzer, VelocityReport, VelocitySample};
use crate::workload::{WorkloadDistributor, WorkloadReport};

/// Caller-supplied options for one analysis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsOptions {
    pub metric: BurndownMetric,
    /// Cap on velocity history; 0 means no cap.
    pub limit: usize,
    /// Reference instant, typically "now". The engine takes no clock of
    /// its own.
    pub as_of: DateTime<Utc>,
    /// Restrict burndown to one cycle. Default: every non-cancelled cycle.
    pub cycle_id: Option<String>,
}

impl AnalyticsOptions {
    pub fn new(as_of: DateTime<Utc>) -> Self {
        Self {
            metric: BurndownMetric::default(),
            limit: 0,
            as_of,
            cycle_id: None,
        }
    }
}

/// Ticket counts per workflow status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketStatusBreakdown {
    pub backlog: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub in_review: usize,
    pub testing: usize,
    pub done: usize,
    pub blocked: usize,
    pub total: usize,
}

impl TicketStatusBreakdown {
    pub fn count(tickets: &[Ticket]) -> Self {
        let mut breakdown = Self {
            total: tickets.len(),
            ..Self::default()
        };
        for ticket in tickets {
            match ticket.status {
                TicketStatus::Backlog => breakdown.backlog += 1,
                TicketStatus::Todo => breakdown.todo += 1,
                TicketStatus::InProgress => breakdown.in_progress += 1,
                TicketStatus::InReview => breakdown.in_review += 1,
                TicketStatus::Testing => breakdown.testing += 1,
                TicketStatus::Done => breakdown.done += 1,
                TicketStatus::Blocked => breakdown.blocked += 1,
            }
        }
        breakdown
    }
}

/// The combined analytics result for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAnalytics {
    /// The reference instant the analysis was computed against.
    pub generated_at: DateTime<Utc>,
    pub burndowns: Vec<BurndownReport>,
    pub velocity: VelocityReport,
    pub workload: WorkloadReport,
    pub risk: RiskReport,
    pub ticket_status: TicketStatusBreakdown,
}

/// The delivery analytics engine.
pub struct AnalyticsEngine {
    burndown: BurndownCalculator,
    velocity: VelocityAnalyzer,
    workload: WorkloadDistributor,
    risk: RiskScorer,
}

impl AnalyticsEngine {
    /// Create an engine from a validated configuration.
    pub fn new(config: AnalyticsConfig) -> CadenceResult<Self> {
        config.validate()?;
        Ok(Self {
            burndown: BurndownCalculator::new(),
            velocity: VelocityAnalyzer::new(config.velocity),
            workload: WorkloadDistributor::new(config.workload),
            risk: RiskScorer::new(config.risk),
        })
    }

    /// Create an engine with default thresholds.
    pub fn with_defaults() -> Self {
        Self {
            burndown: BurndownCalculator::new(),
            velocity: VelocityAnalyzer::with_defaults(),
            workload: WorkloadDistributor::with_defaults(),
            risk: RiskScorer::with_defaults(),
        }
    }

    /// Run every analysis over `snapshot` and return one combined result.
    ///
    /// The whole input is validated up front; the first malformed record
    /// rejects the call with no partial result.
    pub fn analyze(
        &self,
        snapshot: &DeliverySnapshot,
        options: &AnalyticsOptions,
    ) -> CadenceResult<DeliveryAnalytics> {
        for cycle in &snapshot.cycles {
            cycle.validate()?;
        }
        for risk in &snapshot.risks {
            risk.validate()?;
        }

        let selected = self.select_cycles(snapshot, options);
        debug!(
            cycles = selected.len(),
            tickets = snapshot.tickets.len(),
            metric = %options.metric,
            "computing burndown reports"
        );

        let burndowns = selected
            .par_iter()
            .map(|cycle| {
                let tickets = snapshot.tickets_in_cycle(&cycle.id);
                self.burndown
                    .calculate(cycle, &tickets, options.metric, options.as_of)
            })
            .collect::<CadenceResult<Vec<BurndownReport>>>()?;

        let samples = velocity_samples(snapshot);
        debug!(samples = samples.len(), limit = options.limit, "analyzing velocity history");
        let velocity = self.velocity.analyze(&samples, options.limit);

        let workload = self.workload.distribute(
            &snapshot.members,
            &snapshot.tickets,
            snapshot.unassigned_open_count(),
        );

        let risk = self.risk.assess(&snapshot.risks)?;

        Ok(DeliveryAnalytics {
            generated_at: options.as_of,
            burndowns,
            velocity,
            workload,
            risk,
            ticket_status: TicketStatusBreakdown::count(&snapshot.tickets),
        })
    }

    /// Cycles to burn down: the requested one, or every non-cancelled cycle
    /// in snapshot order. An unknown `cycle_id` selects nothing; absent
    /// data yields empty output, not an error.
    fn select_cycles<'a>(
        &self,
        snapshot: &'a DeliverySnapshot,
        options: &AnalyticsOptions,
    ) -> Vec<&'a Cycle> {
        match &options.cycle_id {
            Some(id) => snapshot.cycles.iter().filter(|c| &c.id == id).collect(),
            None => snapshot
                .cycles
                .iter()
                .filter(|c| c.status != CycleStatus::Cancelled)
                .collect(),
        }
    }
}

/// Derive velocity samples from completed cycles, most recent end date
/// first. A cycle's stored velocity (set on completion) is authoritative;
/// completed points are re-derived from its done tickets only when the
/// stored value is absent.
fn velocity_samples(snapshot: &DeliverySnapshot) -> Vec<VelocitySample> {
    let mut completed: Vec<&Cycle> = snapshot
        .cycles
        .iter()
        .filter(|c| c.status == CycleStatus::Completed)
        .collect();
    // Stable sort: cycles sharing an end date keep snapshot order.
    completed.sort_by(|a, b| b.end_date.cmp(&a.end_date));

    completed
        .iter()
        .map(|cycle| {
            let tickets = snapshot.tickets_in_cycle(&cycle.id);
            let committed: u32 = tickets.iter().map(|t| t.points()).sum();
            let done: u32 = tickets
                .iter()
                .filter(|t| t.is_done())
                .map(|t| t.points())
                .sum();
            VelocitySample {
                cycle_id: cycle.id.clone(),
                name: cycle.name.clone(),
                committed_points: committed,
                completed_points: cycle.velocity.unwrap_or(done),
            }
        })
        .collect()
}
