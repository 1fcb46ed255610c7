use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Workflow status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Backlog,
    Todo,
    InProgress,
    InReview,
    Testing,
    Done,
    Blocked,
}

impl TicketStatus {
    /// All statuses in workflow order. Used for stable breakdown output.
    pub const ALL: [TicketStatus; 7] = [
        TicketStatus::Backlog,
        TicketStatus::Todo,
        TicketStatus::InProgress,
        TicketStatus::InReview,
        TicketStatus::Testing,
        TicketStatus::Done,
        TicketStatus::Blocked,
    ];
}

/// A unit of trackable work with status, size, and optional assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub status: TicketStatus,
    /// Estimated size. Unestimated tickets carry no points.
    pub story_points: Option<u32>,
    /// Team member this ticket is assigned to.
    pub assigned_to: Option<String>,
    /// Cycle this ticket is scheduled in.
    pub cycle: Option<String>,
    /// Set exactly once, when status becomes done.
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    pub fn is_done(&self) -> bool {
        self.status == TicketStatus::Done
    }

    /// Open = any status other than done.
    pub fn is_open(&self) -> bool {
        !self.is_done()
    }

    /// Active work counts toward a member's load: neither done nor blocked.
    pub fn is_active(&self) -> bool {
        !matches!(self.status, TicketStatus::Done | TicketStatus::Blocked)
    }

    /// Story points, with unestimated tickets counting as zero.
    pub fn points(&self) -> u32 {
        self.story_points.unwrap_or(0)
    }
}
