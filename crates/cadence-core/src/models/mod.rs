//! Domain records the engine analyzes.
//!
//! These are read-only snapshot types: the host fetches and owns them, the
//! engine only derives ephemeral output. Lifecycle transitions (ticket
//! workflow, cycle planned→active→closed, risk resolution) are the host's
//! concern.

mod cycle;
mod risk_factor;
mod snapshot;
mod team_member;
mod ticket;

pub use cycle::{Cycle, CycleStatus};
pub use risk_factor::{check_rating, RiskFactor, RiskStatus};
pub use snapshot::DeliverySnapshot;
pub use team_member::TeamMember;
pub use ticket::{Ticket, TicketStatus};
