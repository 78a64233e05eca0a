//! Word Scramble engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::config::WordConfig;
use super::puzzle::WordPuzzle;
use crate::core::countdown::seconds;
use crate::core::{ConfigError, Countdown, GameId, GameRng};
use crate::engine::{Engine, EventQueue};

/// Word Scramble state machine: `Idle → Playing → Ended`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WordPhase {
    Idle,
    Playing,
    Ended,
}

/// Events emitted by [`WordEngine`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordEvent {
    Correct { points: u32 },
    Incorrect,
    GameEnded { score: u32 },
}

/// What happened to a submitted guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessResult {
    /// No round in progress.
    Ignored,
    Correct { points: u32 },
    Incorrect,
}

/// Timed word-unscramble engine.
#[derive(Clone, Debug)]
pub struct WordEngine {
    config: WordConfig,
    rng: GameRng,
    phase: WordPhase,
    score: u32,
    clock: Countdown,
    puzzle: Option<WordPuzzle>,
    events: EventQueue<WordEvent>,
}

impl WordEngine {
    /// Create an engine. Fails on an empty or malformed word list.
    pub fn new(config: WordConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_rng(config, GameRng::new(seed))
    }

    /// Create an engine drawing from `rng`, e.g. [`GameRng::from_entropy`]
    /// for real play. The seed stays readable through [`Self::seed`].
    pub fn from_rng(config: WordConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config.normalized(), rng))
    }

    /// Engine with the stock word list and 30 second rounds.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_valid(WordConfig::default(), GameRng::new(seed))
    }

    fn from_valid(config: WordConfig, rng: GameRng) -> Self {
        let clock = Countdown::new(config.duration());
        Self {
            config,
            rng,
            phase: WordPhase::Idle,
            score: 0,
            clock,
            puzzle: None,
            events: EventQueue::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &WordConfig {
        &self.config
    }

    /// Seed of the engine's RNG. Replaying it with the same config
    /// reproduces the same random draws.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Seconds left on the clock. Never negative.
    #[must_use]
    pub fn time_remaining_secs(&self) -> f64 {
        self.clock.remaining_secs()
    }

    #[must_use]
    pub fn time_remaining(&self) -> Duration {
        self.clock.remaining()
    }

    /// The puzzle on screen. `None` before the first start.
    #[must_use]
    pub fn puzzle(&self) -> Option<&WordPuzzle> {
        self.puzzle.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == WordPhase::Playing
    }

    /// Draw a fresh puzzle, abandoning the current one without penalty.
    ///
    /// Ignored unless playing.
    pub fn next_puzzle(&mut self) {
        if self.is_active() {
            self.draw_puzzle();
        }
    }

    /// Check a guess against the current answer, ignoring case.
    pub fn submit_guess(&mut self, text: &str) -> GuessResult {
        if !self.is_active() {
            trace!(phase = ?self.phase, "guess ignored");
            return GuessResult::Ignored;
        }
        let Some(puzzle) = &self.puzzle else {
            return GuessResult::Ignored;
        };

        if !puzzle.is_solved_by(text) {
            self.events.emit(WordEvent::Incorrect);
            return GuessResult::Incorrect;
        }

        let points = puzzle.points();
        self.score += points;
        self.events.emit(WordEvent::Correct { points });
        self.draw_puzzle();
        self.clock
            .extend_capped(self.config.bonus(), self.config.duration());
        GuessResult::Correct { points }
    }

    fn draw_puzzle(&mut self) {
        let Some(word) = self.rng.choose(&self.config.words) else {
            return;
        };
        let word = word.clone();
        self.puzzle = Some(WordPuzzle::scramble(&word, &mut self.rng));
    }

    fn finish(&mut self) {
        self.phase = WordPhase::Ended;
        debug!(score = self.score, "word scramble ended");
        self.events.emit(WordEvent::GameEnded { score: self.score });
    }
}

impl Engine for WordEngine {
    type Event = WordEvent;
    type Phase = WordPhase;

    fn game_id(&self) -> GameId {
        GameId::WordScramble
    }

    fn phase(&self) -> WordPhase {
        self.phase
    }

    fn is_running(&self) -> bool {
        self.is_active()
    }

    fn start(&mut self) {
        self.score = 0;
        self.clock.reset(self.config.duration());
        self.phase = WordPhase::Playing;
        self.draw_puzzle();
        debug!(seconds = self.clock.remaining_secs(), "word scramble started");
    }

    fn tick(&mut self, delta_secs: f64) {
        if !self.is_active() {
            return;
        }
        let Some(delta) = seconds(delta_secs) else {
            trace!(delta_secs, "tick ignored");
            return;
        };
        if self.clock.tick(delta) {
            self.finish();
        }
    }

    fn end(&mut self) {
        if self.is_active() {
            self.finish();
        }
    }

    fn cancel_pending(&mut self) {}

    fn tick_interval(&self) -> Duration {
        self.config.tick()
    }

    fn drain_events(&mut self) -> Vec<WordEvent> {
        self.events.drain()
    }
}
