//! Request Timer
//!
//! One timer per in-flight request, owned by the request that started it.

use crate::util::round_latency;
use std::time::Instant;

/// Start instant of one upstream call
#[derive(Debug)]
pub struct RequestTimer {
    started: Instant,
}

impl RequestTimer {
    /// Capture the current instant
    #[must_use]
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    #[cfg(test)]
    pub(crate) fn started_at(started: Instant) -> Self {
        Self { started }
    }

    /// Seconds since the timer started, rounded to milliseconds
    #[must_use]
    pub fn elapsed_seconds(&self) -> f64 {
        round_latency(self.started.elapsed().as_secs_f64())
    }
}

/// Seconds elapsed on `timer`, or `0.0` when no timer was started.
#[must_use]
pub fn elapsed_seconds(timer: Option<&RequestTimer>) -> f64 {
    timer.map_or(0.0, RequestTimer::elapsed_seconds)
}
