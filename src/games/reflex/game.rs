//! Quick Clicker engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::config::ReflexConfig;
use super::target::Target;
use crate::core::countdown::seconds;
use crate::core::{ConfigError, Countdown, GameId, GameRng};
use crate::engine::{Engine, EventQueue};

/// Quick Clicker state machine: `Idle → Playing → Ended`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflexPhase {
    Idle,
    Playing,
    Ended,
}

/// Events emitted by [`ReflexEngine`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReflexEvent {
    /// Extra time was granted.
    Bonus { bonus_ms: u64 },
    /// The round is over.
    GameEnded { score: u32 },
}

/// Timed target-clicking engine.
#[derive(Clone, Debug)]
pub struct ReflexEngine {
    config: ReflexConfig,
    rng: GameRng,
    phase: ReflexPhase,
    score: u32,
    clock: Countdown,
    target: Option<Target>,
    events: EventQueue<ReflexEvent>,
}

impl ReflexEngine {
    /// Create an engine. Fails if the play area or timings are unusable.
    pub fn new(config: ReflexConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_rng(config, GameRng::new(seed))
    }

    /// Create an engine drawing from `rng`, e.g. [`GameRng::from_entropy`]
    /// for real play. The seed stays readable through [`Self::seed`].
    pub fn from_rng(config: ReflexConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config, rng))
    }

    /// Engine with the stock 400x300 area and 10 second rounds.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_valid(ReflexConfig::default(), GameRng::new(seed))
    }

    fn from_valid(config: ReflexConfig, rng: GameRng) -> Self {
        let clock = Countdown::new(config.duration());
        Self {
            config,
            rng,
            phase: ReflexPhase::Idle,
            score: 0,
            clock,
            target: None,
            events: EventQueue::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &ReflexConfig {
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

    /// The target currently on screen. `None` before the first start.
    #[must_use]
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == ReflexPhase::Playing
    }

    /// Replace the current target, e.g. for scripted replays.
    ///
    /// Ignored unless playing.
    pub fn set_target(&mut self, target: Target) {
        if self.is_active() {
            self.target = Some(target);
        }
    }

    /// Register a hit on the current target.
    ///
    /// Returns the points awarded, or `None` if the round is not running.
    pub fn hit_target(&mut self) -> Option<u32> {
        if !self.is_active() {
            trace!(phase = ?self.phase, "hit ignored");
            return None;
        }
        let points = self.target.map_or(1, |t| t.points());

        let every = self.config.bonus_every;
        if self.score % every == every - 1 {
            let extra = self.config.bonus();
            self.clock.extend(extra);
            self.events.emit(ReflexEvent::Bonus {
                bonus_ms: extra.as_millis() as u64,
            });
        }

        self.score += points;
        self.place_target();
        Some(points)
    }

    /// Register a click at (`x`, `y`). Counts as a hit only inside the
    /// current target's hitbox.
    pub fn click_at(&mut self, x: f64, y: f64) -> Option<u32> {
        match self.target {
            Some(target) if target.contains(x, y) => self.hit_target(),
            _ => None,
        }
    }

    fn place_target(&mut self) {
        self.target = Some(Target::random(&mut self.rng, &self.config));
    }

    fn finish(&mut self) {
        self.phase = ReflexPhase::Ended;
        debug!(score = self.score, "quick clicker ended");
        self.events.emit(ReflexEvent::GameEnded { score: self.score });
    }
}

impl Engine for ReflexEngine {
    type Event = ReflexEvent;
    type Phase = ReflexPhase;

    fn game_id(&self) -> GameId {
        GameId::QuickClicker
    }

    fn phase(&self) -> ReflexPhase {
        self.phase
    }

    fn is_running(&self) -> bool {
        self.is_active()
    }

    fn start(&mut self) {
        self.score = 0;
        self.clock.reset(self.config.duration());
        self.phase = ReflexPhase::Playing;
        self.place_target();
        debug!(seconds = self.clock.remaining_secs(), "quick clicker started");
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

    fn drain_events(&mut self) -> Vec<ReflexEvent> {
        self.events.drain()
    }
}
