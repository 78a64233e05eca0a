//! Memory Match configuration.

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// The stock alphabet: 8 symbols, 16 cards.
pub const DEFAULT_SYMBOLS: [&str; 8] = ["🍕", "🌮", "🍔", "🍦", "🍓", "🍇", "🥑", "🍋"];

/// Memory Match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Distinct card faces. Each appears twice in the deck.
    pub alphabet: Vec<String>,

    /// How long a matched pair stays flipped before it is locked in (ms).
    pub match_delay_ms: u64,

    /// How long a mismatched pair stays visible before flipping back (ms).
    pub mismatch_delay_ms: u64,

    /// Shuffle the deck on start. When false the deck is the alphabet
    /// followed by the alphabet again, which makes layouts predictable.
    pub shuffle: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_SYMBOLS.iter().map(|s| (*s).to_string()).collect(),
            match_delay_ms: 500,
            mismatch_delay_ms: 1000,
            shuffle: true,
        }
    }
}

impl MatchConfig {
    /// Replace the alphabet.
    #[must_use]
    pub fn with_alphabet<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alphabet = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Set both evaluation delays.
    #[must_use]
    pub fn with_delays(mut self, match_delay_ms: u64, mismatch_delay_ms: u64) -> Self {
        self.match_delay_ms = match_delay_ms;
        self.mismatch_delay_ms = mismatch_delay_ms;
        self
    }

    /// Keep the deck in alphabet order.
    #[must_use]
    pub fn unshuffled(mut self) -> Self {
        self.shuffle = false;
        self
    }

    /// Number of cards a deck built from this config holds.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.alphabet.len() * 2
    }

    pub(crate) fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    pub(crate) fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Check that this alphabet yields a playable deck.
    ///
    /// Every symbol must be non-empty and distinct, and there must be at
    /// least two of them; the deck is the alphabet doubled, so it is always
    /// even and every face appears exactly twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = FxHashSet::default();
        for symbol in &self.alphabet {
            if symbol.is_empty() {
                return Err(ConfigError::EmptySymbol);
            }
            if !seen.insert(symbol.as_str()) {
                return Err(ConfigError::DuplicateSymbol(symbol.clone()));
            }
        }
        if seen.len() < 2 {
            return Err(ConfigError::TooFewSymbols(seen.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.alphabet.len(), 8);
        assert_eq!(config.deck_size(), 16);
        assert_eq!(config.match_delay_ms, 500);
        assert_eq!(config.mismatch_delay_ms, 1000);
        assert!(config.shuffle);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = MatchConfig::default()
            .with_alphabet(["A", "B"])
            .with_delays(10, 20)
            .unshuffled();

        assert_eq!(config.alphabet, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(config.match_delay(), Duration::from_millis(10));
        assert_eq!(config.mismatch_delay(), Duration::from_millis(20));
        assert!(!config.shuffle);
    }

    #[test]
    fn test_rejects_small_alphabet() {
        let config = MatchConfig::default().with_alphabet(["A"]);
        assert_eq!(config.validate(), Err(ConfigError::TooFewSymbols(1)));

        let empty = MatchConfig::default().with_alphabet(Vec::<String>::new());
        assert_eq!(empty.validate(), Err(ConfigError::TooFewSymbols(0)));
    }

    #[test]
    fn test_rejects_duplicates_and_blanks() {
        let dup = MatchConfig::default().with_alphabet(["A", "B", "A"]);
        assert_eq!(dup.validate(), Err(ConfigError::DuplicateSymbol("A".into())));

        let blank = MatchConfig::default().with_alphabet(["A", ""]);
        assert_eq!(blank.validate(), Err(ConfigError::EmptySymbol));
    }

    #[test]
    fn test_serialization() {
        let config = MatchConfig::default().unshuffled();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
