use std::collections::HashMap;

use cadence_core::config::WorkloadThresholds;
use cadence_core::models::{TeamMember, Ticket};

use crate::stats;

use super::types::{MemberWorkload, WorkloadBucket, WorkloadReport};

/// Aggregates each member's active load and classifies it into buckets.
pub struct WorkloadDistributor {
    thresholds: WorkloadThresholds,
}

impl WorkloadDistributor {
    pub fn new(thresholds: WorkloadThresholds) -> Self {
        Self { thresholds }
    }

    pub fn with_defaults() -> Self {
        Self::new(WorkloadThresholds::default())
    }

    /// Compute the workload distribution for `members` over `tickets`.
    ///
    /// `unassigned_open` is the count of open tickets with no assignee,
    /// supplied separately because those tickets belong to nobody below.
    pub fn distribute(
        &self,
        members: &[TeamMember],
        tickets: &[Ticket],
        unassigned_open: usize,
    ) -> WorkloadReport {
        let mut by_member: HashMap<&str, Vec<&Ticket>> = HashMap::new();
        for ticket in tickets {
            if let Some(assignee) = ticket.assigned_to.as_deref() {
                by_member.entry(assignee).or_default().push(ticket);
            }
        }

        let mut loads: Vec<MemberWorkload> = members
            .iter()
            .map(|m| {
                let assigned = by_member.get(m.id.as_str()).map_or(&[][..], |v| v.as_slice());
                self.member_load(m, assigned)
            })
            .collect();

        // Stable sort keeps snapshot order within a bucket.
        loads.sort_by_key(|l| std::cmp::Reverse(l.bucket.severity()));

        let alerts = self.alerts(&loads, unassigned_open);

        WorkloadReport {
            members: loads,
            unassigned_open,
            alerts,
        }
    }

    fn member_load(&self, member: &TeamMember, tickets: &[&Ticket]) -> MemberWorkload {
        let active: Vec<&&Ticket> = tickets.iter().filter(|t| t.is_active()).collect();
        let active_points: u32 = active.iter().map(|t| t.points()).sum();
        let assigned_points: u32 = tickets.iter().map(|t| t.points()).sum();
        let completed_points: u32 = tickets
            .iter()
            .filter(|t| t.is_done())
            .map(|t| t.points())
            .sum();

        MemberWorkload {
            member_id: member.id.clone(),
            name: member.name.clone(),
            active_points,
            active_tickets: active.len(),
            assigned_points,
            completed_points,
            completion_rate: stats::percent(completed_points as f64, assigned_points as f64),
            bucket: WorkloadBucket::classify(active_points, &self.thresholds),
        }
    }

    /// Independent boolean predicates, all applicable included, fixed order.
    fn alerts(&self, loads: &[MemberWorkload], unassigned_open: usize) -> Vec<String> {
        let overloaded = loads
            .iter()
            .filter(|l| l.bucket == WorkloadBucket::Overloaded)
            .count();
        let light = loads
            .iter()
            .filter(|l| l.bucket == WorkloadBucket::Light)
            .count();

        let mut alerts = Vec::new();

        if overloaded > 0 {
            alerts.push(format!("{} team member(s) are overloaded", overloaded));
        }

        if overloaded > 0 && light > 0 {
            alerts.push(
                "Consider rebalancing: some members are overloaded while others have little \
                 active work"
                    .to_string(),
            );
        }

        if unassigned_open > self.thresholds.backlog_alert_threshold {
            alerts.push(format!(
                "{} open tickets are unassigned; triage the backlog",
                unassigned_open
            ));
        }

        alerts
    }
}

impl Default for WorkloadDistributor {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::config::WorkloadThresholds;

    #[test]
    fn bucket_boundaries_are_inclusive() {
        let t = WorkloadThresholds::default();
        assert_eq!(WorkloadBucket::classify(0, &t), WorkloadBucket::Light);
        assert_eq!(WorkloadBucket::classify(1, &t), WorkloadBucket::Normal);
        assert_eq!(WorkloadBucket::classify(8, &t), WorkloadBucket::Normal);
        assert_eq!(WorkloadBucket::classify(9, &t), WorkloadBucket::Heavy);
        assert_eq!(WorkloadBucket::classify(13, &t), WorkloadBucket::Heavy);
        assert_eq!(WorkloadBucket::classify(14, &t), WorkloadBucket::Overloaded);
    }

    #[test]
    fn bucket_respects_custom_cut_points() {
        let t = WorkloadThresholds {
            light_max: 2,
            normal_max: 10,
            heavy_max: 20,
            ..WorkloadThresholds::default()
        };
        assert_eq!(WorkloadBucket::classify(2, &t), WorkloadBucket::Light);
        assert_eq!(WorkloadBucket::classify(10, &t), WorkloadBucket::Normal);
        assert_eq!(WorkloadBucket::classify(21, &t), WorkloadBucket::Overloaded);
    }
}
