/// Cadence engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Workload bucket cut points (inclusive upper bounds).
pub const DEFAULT_WORKLOAD_LIGHT_MAX: u32 = 0;
pub const DEFAULT_WORKLOAD_NORMAL_MAX: u32 = 8;
pub const DEFAULT_WORKLOAD_HEAVY_MAX: u32 = 13;

/// Unassigned open tickets above this count trigger a backlog alert.
pub const DEFAULT_BACKLOG_ALERT_THRESHOLD: usize = 5;

/// Risk level cut points (inclusive lower bounds on probability × impact).
pub const DEFAULT_RISK_MEDIUM_MIN: u8 = 6;
pub const DEFAULT_RISK_HIGH_MIN: u8 = 12;
pub const DEFAULT_RISK_CRITICAL_MIN: u8 = 20;

/// Valid range for risk probability and impact ratings.
pub const RISK_RATING_MIN: u8 = 1;
pub const RISK_RATING_MAX: u8 = 5;

/// Number of cycles in each velocity trend comparison window.
pub const DEFAULT_TREND_WINDOW: usize = 3;

/// Minimum cycles of history before trend detection activates.
pub const DEFAULT_MIN_HISTORY_FOR_TREND: usize = 6;

/// Coefficient of variation (percent) above which velocity is flagged.
pub const DEFAULT_VARIANCE_ALERT_THRESHOLD: f64 = 30.0;
