//! Per-member active-load aggregation and categorical classification.

mod distributor;
mod types;

pub use distributor::WorkloadDistributor;
pub use types::{MemberWorkload, WorkloadBucket, WorkloadReport};
