use serde::{Deserialize, Serialize};

use super::{Cycle, RiskFactor, TeamMember, Ticket};

/// A read-only bundle of domain records for one analysis call.
///
/// The host fetches whatever its persistence layer holds for one
/// organization and hands it over; the engine never reads anything else.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliverySnapshot {
    pub tickets: Vec<Ticket>,
    pub cycles: Vec<Cycle>,
    pub members: Vec<TeamMember>,
    pub risks: Vec<RiskFactor>,
}

impl DeliverySnapshot {
    /// Tickets scheduled in the given cycle, in snapshot order.
    pub fn tickets_in_cycle(&self, cycle_id: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.cycle.as_deref() == Some(cycle_id))
            .collect()
    }

    /// Tickets assigned to the given member, in snapshot order.
    pub fn tickets_assigned_to(&self, member_id: &str) -> Vec<&Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.assigned_to.as_deref() == Some(member_id))
            .collect()
    }

    /// Open tickets with no assignee.
    pub fn unassigned_open_count(&self) -> usize {
        self.tickets
            .iter()
            .filter(|t| t.assigned_to.is_none() && t.is_open())
            .count()
    }
}
