use serde::{Deserialize, Serialize};

/// A member of the delivery team.
///
/// Ticket assignment is a relationship, not ownership: tickets point at a
/// member through `Ticket::assigned_to`, and the snapshot groups them on
/// demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
}
