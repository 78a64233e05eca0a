//! Game identifiers and best-score ordering.

use serde::{Deserialize, Serialize};

/// Which mini-game a score or session belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameId {
    /// Pair matching; scored in moves.
    MemoryMatch,
    /// Timed target clicking; scored in points.
    QuickClicker,
    /// Timed word unscrambling; scored in points.
    WordScramble,
}

impl GameId {
    /// All games in menu order.
    pub const ALL: [GameId; 3] = [GameId::MemoryMatch, GameId::WordScramble, GameId::QuickClicker];

    /// Fixed key under which the best score is persisted.
    #[must_use]
    pub const fn storage_key(self) -> &'static str {
        match self {
            GameId::MemoryMatch => "memoryMatchBestScore",
            GameId::QuickClicker => "quickClickerBestScore",
            GameId::WordScramble => "wordScrambleBestScore",
        }
    }

    /// How scores for this game compare.
    #[must_use]
    pub const fn score_order(self) -> ScoreOrder {
        match self {
            GameId::MemoryMatch => ScoreOrder::LowerIsBetter,
            GameId::QuickClicker | GameId::WordScramble => ScoreOrder::HigherIsBetter,
        }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameId::MemoryMatch => "Memory Match",
            GameId::QuickClicker => "Quick Clicker",
            GameId::WordScramble => "Word Scramble",
        };
        f.write_str(name)
    }
}

/// Direction in which a score improves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreOrder {
    /// Fewer is better (move counts).
    LowerIsBetter,
    /// More is better (points).
    HigherIsBetter,
}

impl ScoreOrder {
    /// Does `score` beat the stored `best`?
    ///
    /// With no stored best, any lower-is-better result counts, while a
    /// higher-is-better result must beat an implicit best of zero.
    #[must_use]
    pub fn is_improvement(self, score: i64, best: Option<i64>) -> bool {
        match self {
            ScoreOrder::LowerIsBetter => best.map_or(true, |b| score < b),
            ScoreOrder::HigherIsBetter => score > best.unwrap_or(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_keys_are_distinct() {
        let keys: std::collections::HashSet<_> =
            GameId::ALL.iter().map(|g| g.storage_key()).collect();
        assert_eq!(keys.len(), 3);
        assert_eq!(GameId::MemoryMatch.storage_key(), "memoryMatchBestScore");
    }

    #[test]
    fn test_lower_is_better() {
        let order = GameId::MemoryMatch.score_order();
        assert!(order.is_improvement(12, None));
        assert!(order.is_improvement(11, Some(12)));
        assert!(!order.is_improvement(12, Some(12)));
        assert!(!order.is_improvement(13, Some(12)));
    }

    #[test]
    fn test_higher_is_better() {
        let order = GameId::QuickClicker.score_order();
        assert!(order.is_improvement(1, None));
        assert!(!order.is_improvement(0, None));
        assert!(order.is_improvement(21, Some(20)));
        assert!(!order.is_improvement(20, Some(20)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", GameId::WordScramble), "Word Scramble");
    }
}
