//! Best-score persistence.

use tracing::warn;

use super::store::KeyValueStore;
use crate::core::{GameId, StorageResult};

/// Persistent best score per game.
pub trait ScorePort {
    /// Stored best, or `None` if the game has never been finished.
    fn best(&self, game: GameId) -> Option<i64>;

    /// Overwrite the stored best.
    fn record(&mut self, game: GameId, score: i64) -> StorageResult<()>;

    /// Store `score` if it beats the current best under the game's
    /// ordering. Returns whether it did.
    fn record_if_better(&mut self, game: GameId, score: i64) -> StorageResult<bool> {
        if !game.score_order().is_improvement(score, self.best(game)) {
            return Ok(false);
        }
        self.record(game, score)?;
        Ok(true)
    }
}

/// [`ScorePort`] over any [`KeyValueStore`], one key per game.
///
/// Scores are stored as decimal strings. A value that does not parse
/// is treated as no best score at all.
#[derive(Clone, Debug, Default)]
pub struct BestScores<S> {
    store: S,
}

impl<S: KeyValueStore> BestScores<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}

impl<S: KeyValueStore> ScorePort for BestScores<S> {
    fn best(&self, game: GameId) -> Option<i64> {
        let raw = self.store.get(game.storage_key())?;
        match raw.trim().parse() {
            Ok(score) => Some(score),
            Err(_) => {
                warn!(%game, value = %raw, "ignoring unparseable best score");
                None
            }
        }
    }

    fn record(&mut self, game: GameId, score: i64) -> StorageResult<()> {
        self.store.set(game.storage_key(), score.to_string())
    }
}
