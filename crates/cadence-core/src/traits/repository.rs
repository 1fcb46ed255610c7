//! Snapshot retrieval interface.
//!
//! Record retrieval belongs to the host: it knows which organization's data
//! may be read and where it lives. The engine only ever consumes the
//! materialized `DeliverySnapshot`; it never calls this trait itself, which
//! keeps every analytics entry point a pure function.

use crate::errors::CadenceResult;
use crate::models::DeliverySnapshot;

/// Host-implemented source of delivery snapshots.
pub trait SnapshotRepository: Send + Sync {
    /// Materialize a read-only snapshot of the current domain records.
    fn snapshot(&self) -> CadenceResult<DeliverySnapshot>;
}

/// In-memory repository for tests and single-process hosts.
#[derive(Debug, Default, Clone)]
pub struct InMemorySnapshotRepository {
    snapshot: DeliverySnapshot,
}

impl InMemorySnapshotRepository {
    pub fn new(snapshot: DeliverySnapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn snapshot(&self) -> CadenceResult<DeliverySnapshot> {
        Ok(self.snapshot.clone())
    }
}
