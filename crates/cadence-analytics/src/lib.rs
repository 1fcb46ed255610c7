//! # cadence-analytics
//!
//! The Cadence delivery analytics engine. Turns read-only snapshots of
//! tickets, cycles, team members, and risk factors into burndown series,
//! velocity trends, workload classifications, and risk scores.
//!
//! Every entry point is a pure function over caller-supplied data: no I/O,
//! no shared mutable state, no retries. Concurrent invocations from many
//! request threads are safe by construction.

pub mod burndown;
pub mod engine;
pub mod risk;
pub mod stats;
pub mod velocity;
pub mod workload;

// Re-export the facade and its option/result types at the crate root.
pub use engine::{AnalyticsEngine, AnalyticsOptions, DeliveryAnalytics, TicketStatusBreakdown};
