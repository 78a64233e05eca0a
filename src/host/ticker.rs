//! Fixed-step tick generation from wall-clock time.

use std::time::Duration;

/// Turns arbitrary elapsed time into whole ticks of a fixed length.
///
/// Leftover time smaller than one tick carries over to the next call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticker {
    interval: Duration,
    carry: Duration,
}

impl Ticker {
    /// A ticker producing ticks of `interval`. A zero interval never ticks.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            carry: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Feed elapsed time; returns how many whole ticks are due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        let total = self.carry.saturating_add(elapsed);
        let interval_ns = self.interval.as_nanos();
        let ticks = total.as_nanos() / interval_ns;
        self.carry = Duration::from_nanos((total.as_nanos() % interval_ns) as u64);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    /// Drop any carried-over partial tick.
    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_ticks() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        assert_eq!(ticker.advance(Duration::from_millis(350)), 3);
        assert_eq!(ticker.advance(Duration::from_millis(50)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(99)), 0);
    }

    #[test]
    fn test_reset_drops_carry() {
        let mut ticker = Ticker::new(Duration::from_secs(1));
        assert_eq!(ticker.advance(Duration::from_millis(900)), 0);
        ticker.reset();
        assert_eq!(ticker.advance(Duration::from_millis(200)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(800)), 1);
    }

    #[test]
    fn test_huge_elapsed_saturates() {
        let mut ticker = Ticker::new(Duration::from_millis(100));
        assert_eq!(ticker.advance(Duration::from_millis(50)), 0);
        assert_eq!(ticker.advance(Duration::MAX), u32::MAX);
    }

    #[test]
    fn test_zero_interval_never_ticks() {
        let mut ticker = Ticker::new(Duration::ZERO);
        assert_eq!(ticker.advance(Duration::from_secs(10)), 0);
    }
}
