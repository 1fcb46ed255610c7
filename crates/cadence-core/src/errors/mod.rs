//! Error types for the Cadence engine.
//!
//! A call into the engine either returns a complete result or a single
//! descriptive error naming the offending input. Nothing partial.

mod config_error;
mod error_code;
mod validation_error;

pub use config_error::ConfigError;
pub use error_code::{CadenceErrorCode, CONFIG_ERROR, VALIDATION_ERROR};
pub use validation_error::ValidationError;

/// Top-level error type aggregating all engine errors.
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CadenceErrorCode for CadenceError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

/// Result alias used throughout the workspace.
pub type CadenceResult<T> = Result<T, CadenceError>;
