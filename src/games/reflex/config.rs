//! Quick Clicker configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Quick Clicker configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReflexConfig {
    /// Play area width in pixels.
    pub width: f64,

    /// Play area height in pixels.
    pub height: f64,

    /// Inset kept clear on each axis so targets stay fully visible.
    /// Target centres land in `[margin/2, extent - margin/2]`.
    pub margin: f64,

    /// Round length (ms).
    pub duration_ms: u64,

    /// Tick length the host drives the clock with (ms).
    pub tick_ms: u64,

    /// Time granted by a bonus (ms).
    pub bonus_ms: u64,

    /// A hit made while `score % bonus_every == bonus_every - 1` earns a bonus.
    pub bonus_every: u32,
}

impl Default for ReflexConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            margin: 60.0,
            duration_ms: 10_000,
            tick_ms: 100,
            bonus_ms: 500,
            bonus_every: 10,
        }
    }
}

impl ReflexConfig {
    /// Set the play area size.
    #[must_use]
    pub fn with_area(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the round length.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration_ms = duration.as_millis() as u64;
        self
    }

    pub(crate) fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    pub(crate) fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub(crate) fn bonus(&self) -> Duration {
        Duration::from_millis(self.bonus_ms)
    }

    /// Check the play area can hold a target and the clock can run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fits = self.margin >= 0.0 && self.width > self.margin && self.height > self.margin;
        if !fits {
            return Err(ConfigError::PlayAreaTooSmall {
                width: self.width,
                height: self.height,
                margin: self.margin,
            });
        }
        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("duration"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroDuration("tick"));
        }
        if self.bonus_every == 0 {
            return Err(ConfigError::ZeroBonusInterval);
        }
        Ok(())
    }
}
