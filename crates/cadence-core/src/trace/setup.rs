//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Cadence tracing/logging system.
///
/// Reads the `CADENCE_LOG` environment variable for per-subsystem log
/// levels, e.g. `CADENCE_LOG=cadence_analytics=debug`.
///
/// Falls back to `cadence=info` if `CADENCE_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CADENCE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("cadence=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
