//! Word Scramble configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// The stock word list.
pub const DEFAULT_WORDS: [&str; 13] = [
    "REACT", "GAME", "CODING", "PUZZLE", "MATCH", "FUN", "PLAY", "LEVEL", "SCORE", "WINNER",
    "BONUS", "ROUND", "CHALLENGE",
];

/// Word Scramble configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordConfig {
    /// Candidate answers. Case is ignored; answers are stored uppercase.
    pub words: Vec<String>,

    /// Round length, also the ceiling for time bonuses (ms).
    pub duration_ms: u64,

    /// Tick length the host drives the clock with (ms).
    pub tick_ms: u64,

    /// Time granted per correct answer (ms).
    pub bonus_ms: u64,
}

impl Default for WordConfig {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect(),
            duration_ms: 30_000,
            tick_ms: 1_000,
            bonus_ms: 3_000,
        }
    }
}

impl WordConfig {
    /// Replace the word list.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words = words.into_iter().map(Into::into).collect();
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

    /// Check the word list and timings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.words.is_empty() {
            return Err(ConfigError::NoWords);
        }
        if let Some(bad) = self
            .words
            .iter()
            .find(|w| w.is_empty() || !w.chars().all(char::is_alphabetic))
        {
            return Err(ConfigError::InvalidWord(bad.clone()));
        }
        if self.duration_ms == 0 {
            return Err(ConfigError::ZeroDuration("duration"));
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroDuration("tick"));
        }
        Ok(())
    }

    /// Uppercase every word.
    pub(crate) fn normalized(mut self) -> Self {
        for word in &mut self.words {
            *word = word.to_uppercase();
        }
        self
    }
}
