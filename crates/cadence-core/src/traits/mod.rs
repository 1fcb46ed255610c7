//! Host-implemented interfaces.

mod repository;

pub use repository::{InMemorySnapshotRepository, SnapshotRepository};
