//! Numeric helpers shared by the tracker and the report generator.

/// Decimal places kept for currency amounts
pub const COST_DECIMALS: i32 = 6;

/// Decimal places kept for latencies (millisecond precision)
pub const LATENCY_DECIMALS: i32 = 3;

/// Round `value` to `decimals` places (half away from zero).
///
/// # Examples
/// ```
/// use tokenmeter_metrics::util::round_to;
/// assert_eq!(round_to(1.23456, 3), 1.235);
/// assert_eq!(round_to(0.0000004, 6), 0.0);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round a currency amount to [`COST_DECIMALS`].
#[must_use]
pub fn round_cost(value: f64) -> f64 {
    round_to(value, COST_DECIMALS)
}

/// Round a latency in seconds to [`LATENCY_DECIMALS`].
#[must_use]
pub fn round_latency(value: f64) -> f64 {
    round_to(value, LATENCY_DECIMALS)
}
