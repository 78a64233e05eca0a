//! Countdown clock for the timed games.
//!
//! Time is kept in whole milliseconds. Hosts tick in fractional seconds
//! (0.1 s for Quick Clicker, 1 s for Word Scramble), and one hundred 0.1 s
//! ticks from 10 s land on exactly zero.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Convert a host-supplied tick length in seconds to a [`Duration`].
///
/// Rounds to the nearest millisecond. Returns `None` for negative,
/// NaN or infinite input.
#[must_use]
pub fn seconds(secs: f64) -> Option<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    Some(Duration::from_millis((secs * 1000.0).round() as u64))
}

/// A saturating millisecond countdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown {
    remaining_ms: u64,
}

impl Countdown {
    /// Create a countdown starting at `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            remaining_ms: duration.as_millis() as u64,
        }
    }

    /// Restart at `duration`.
    pub fn reset(&mut self, duration: Duration) {
        *self = Self::new(duration);
    }

    /// Time left.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        Duration::from_millis(self.remaining_ms)
    }

    /// Time left in seconds.
    #[must_use]
    pub fn remaining_secs(&self) -> f64 {
        self.remaining_ms as f64 / 1000.0
    }

    /// True once the clock has reached zero.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining_ms == 0
    }

    /// Count down by `delta`, saturating at zero. Returns true if expired.
    pub fn tick(&mut self, delta: Duration) -> bool {
        self.remaining_ms = self.remaining_ms.saturating_sub(delta.as_millis() as u64);
        self.is_expired()
    }

    /// Add time with no upper bound.
    pub fn extend(&mut self, extra: Duration) {
        self.remaining_ms = self.remaining_ms.saturating_add(extra.as_millis() as u64);
    }

    /// Add time, never exceeding `cap`.
    pub fn extend_capped(&mut self, extra: Duration, cap: Duration) {
        self.extend(extra);
        self.remaining_ms = self.remaining_ms.min(cap.as_millis() as u64);
    }
}
