//! Shared numeric helpers.
//!
//! One rounding convention (half-up) and one variance convention
//! (population) for the whole engine. Every division is guarded against a
//! zero denominator and yields 0 rather than NaN/Infinity.

use chrono::{DateTime, Utc};

/// Round to 1 decimal place, half-up.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Integer percentage of `part` in `whole`, rounded half-up. 0 when `whole`
/// is 0.
pub fn percent(part: f64, whole: f64) -> u32 {
    if whole == 0.0 {
        return 0;
    }
    (part / whole * 100.0).round() as u32
}

/// Arithmetic mean. 0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance: `mean((x − mean)²)`.
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Coefficient of variation as a percentage: `std_dev / mean × 100`.
/// 0 when the mean is 0.
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let m = mean(values);
    if m == 0.0 {
        return 0.0;
    }
    std_dev(values) / m * 100.0
}

/// Whole days from `from` to `to`, rounded up. Negative when `to` precedes
/// `from`; callers clamp as needed.
pub fn ceil_days(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    ((to - from).num_seconds() as f64 / 86400.0).ceil() as i64
}
