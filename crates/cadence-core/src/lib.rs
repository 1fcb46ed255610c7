//! # cadence-core
//!
//! Foundation crate for the Cadence delivery analytics engine.
//! Defines domain models, errors, configuration, constants, the repository
//! trait, and tracing setup. The analytics crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod trace;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AnalyticsConfig;
pub use errors::{CadenceError, CadenceResult};
pub use models::{
    Cycle, CycleStatus, DeliverySnapshot, RiskFactor, RiskStatus, TeamMember, Ticket, TicketStatus,
};
