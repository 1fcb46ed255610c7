//! Input validation errors.

use super::error_code::{self, CadenceErrorCode};

/// Errors raised when a snapshot or options value is malformed.
/// Rejected before any computation runs; no partial result is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} out of range: {value} (expected {min}-{max})")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("cycle {cycle_id} has end_date on or before start_date")]
    EmptyDateRange { cycle_id: String },

    #[error("unknown metric selector: {value} (expected \"points\" or \"count\")")]
    UnknownMetric { value: String },
}

impl CadenceErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}
