//! Memory Match engine.

use std::time::Duration;

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::config::MatchConfig;
use crate::core::countdown::seconds;
use crate::core::{ConfigError, GameId, GameRng, Schedule};
use crate::engine::{Engine, EventQueue};

/// A card in the deck. `id` is its position in the shuffled deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: usize,
    pub symbol: String,
}

/// Memory Match state machine.
///
/// `Idle → Playing → (Evaluating ⇄ Playing) → Complete`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// No session yet, or the session was ended.
    Idle,
    /// Waiting for the player to flip a card.
    Playing,
    /// Two cards are face up; their resolution is scheduled.
    Evaluating,
    /// Every card is matched.
    Complete,
}

/// Events emitted by [`MatchEngine`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A pair was locked in.
    Matched { first: usize, second: usize },
    /// A pair flipped back face down.
    Mismatch { first: usize, second: usize },
    /// The whole deck is matched.
    GameCompleted { moves: u32 },
}

/// Delayed outcome of a two-card flip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resolution {
    Match(usize, usize),
    Mismatch(usize, usize),
}

/// Cheap snapshot of a Memory Match session for rendering.
///
/// Deck and matched set are persistent structures, so taking a view
/// is O(1) regardless of deck size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchView {
    pub phase: MatchPhase,
    pub deck: Vector<Card>,
    pub flipped: SmallVec<[usize; 2]>,
    pub matched: OrdSet<usize>,
    pub moves: u32,
}

/// Pair-matching engine.
#[derive(Clone, Debug)]
pub struct MatchEngine {
    config: MatchConfig,
    rng: GameRng,
    phase: MatchPhase,
    deck: Vector<Card>,
    /// Face-up cards awaiting evaluation. Never more than two.
    flipped: SmallVec<[usize; 2]>,
    /// Locked-in cards. Only grows until the next `start`.
    matched: OrdSet<usize>,
    moves: u32,
    pending: Schedule<Resolution>,
    events: EventQueue<MatchEvent>,
}

impl MatchEngine {
    /// Create an engine. Fails if the alphabet cannot form a valid deck.
    pub fn new(config: MatchConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::from_rng(config, GameRng::new(seed))
    }

    /// Create an engine drawing from `rng`, e.g. [`GameRng::from_entropy`]
    /// for real play. The seed stays readable through [`Self::seed`].
    pub fn from_rng(config: MatchConfig, rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config, rng))
    }

    /// Engine with the stock 8-symbol alphabet.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_valid(MatchConfig::default(), GameRng::new(seed))
    }

    fn from_valid(config: MatchConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            phase: MatchPhase::Idle,
            deck: Vector::new(),
            flipped: SmallVec::new(),
            matched: OrdSet::new(),
            moves: 0,
            pending: Schedule::new(),
            events: EventQueue::new(),
        }
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Seed of the engine's RNG. Replaying it with the same config
    /// reproduces the same random draws.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The current deck, in table order.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// Indices currently face up and awaiting evaluation.
    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    /// Indices locked in as matched.
    #[must_use]
    pub fn matched(&self) -> &OrdSet<usize> {
        &self.matched
    }

    /// Pairs attempted so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Should the card at `index` be rendered face up?
    #[must_use]
    pub fn is_face_up(&self, index: usize) -> bool {
        self.flipped.contains(&index) || self.matched.contains(&index)
    }

    /// Number of scheduled resolutions not yet applied.
    #[must_use]
    pub fn pending_resolutions(&self) -> usize {
        self.pending.pending()
    }

    /// Time until the scheduled resolution fires, if one is pending.
    #[must_use]
    pub fn resolves_in(&self) -> Option<Duration> {
        self.pending.next_due_in()
    }

    /// O(1) snapshot for rendering.
    #[must_use]
    pub fn view(&self) -> MatchView {
        MatchView {
            phase: self.phase,
            deck: self.deck.clone(),
            flipped: self.flipped.clone(),
            matched: self.matched.clone(),
            moves: self.moves,
        }
    }

    /// Turn a card face up.
    ///
    /// Ignored unless the engine is waiting for a flip, the index is on the
    /// table, and the card is neither flipped nor matched. The second flip
    /// of a pair costs a move and schedules the pair's resolution.
    pub fn flip(&mut self, index: usize) {
        if self.phase != MatchPhase::Playing {
            trace!(index, phase = ?self.phase, "flip ignored");
            return;
        }
        if index >= self.deck.len() || self.is_face_up(index) || self.flipped.len() >= 2 {
            trace!(index, "flip ignored");
            return;
        }

        self.flipped.push(index);
        if self.flipped.len() < 2 {
            return;
        }

        self.moves += 1;
        self.phase = MatchPhase::Evaluating;

        let (first, second) = (self.flipped[0], self.flipped[1]);
        if self.deck[first].symbol == self.deck[second].symbol {
            self.pending
                .schedule(self.config.match_delay(), Resolution::Match(first, second));
        } else {
            self.pending
                .schedule(self.config.mismatch_delay(), Resolution::Mismatch(first, second));
        }
    }

    fn build_deck(&mut self) -> Vector<Card> {
        let mut symbols: Vec<&String> = self
            .config
            .alphabet
            .iter()
            .chain(self.config.alphabet.iter())
            .collect();
        if self.config.shuffle {
            self.rng.shuffle(&mut symbols);
        }
        symbols
            .into_iter()
            .enumerate()
            .map(|(id, symbol)| Card {
                id,
                symbol: symbol.clone(),
            })
            .collect()
    }

    fn resolve(&mut self, resolution: Resolution) {
        self.flipped.clear();
        match resolution {
            Resolution::Match(first, second) => {
                self.matched.insert(first);
                self.matched.insert(second);
                self.events.emit(MatchEvent::Matched { first, second });

                if self.matched.len() == self.deck.len() {
                    self.phase = MatchPhase::Complete;
                    debug!(moves = self.moves, "memory match complete");
                    self.events.emit(MatchEvent::GameCompleted { moves: self.moves });
                } else {
                    self.phase = MatchPhase::Playing;
                }
            }
            Resolution::Mismatch(first, second) => {
                self.phase = MatchPhase::Playing;
                self.events.emit(MatchEvent::Mismatch { first, second });
            }
        }
    }
}

impl Engine for MatchEngine {
    type Event = MatchEvent;
    type Phase = MatchPhase;

    fn game_id(&self) -> GameId {
        GameId::MemoryMatch
    }

    fn phase(&self) -> MatchPhase {
        self.phase
    }

    fn is_running(&self) -> bool {
        matches!(self.phase, MatchPhase::Playing | MatchPhase::Evaluating)
    }

    fn start(&mut self) {
        let dropped = self.pending.cancel_all();
        self.deck = self.build_deck();
        self.flipped.clear();
        self.matched = OrdSet::new();
        self.moves = 0;
        self.phase = MatchPhase::Playing;
        debug!(cards = self.deck.len(), cancelled = dropped, "memory match started");
    }

    fn tick(&mut self, delta_secs: f64) {
        let Some(delta) = seconds(delta_secs) else {
            trace!(delta_secs, "tick ignored");
            return;
        };
        for resolution in self.pending.advance(delta) {
            self.resolve(resolution);
        }
    }

    fn end(&mut self) {
        self.cancel_pending();
        self.flipped.clear();
        if self.phase != MatchPhase::Idle {
            debug!(moves = self.moves, "memory match ended early");
        }
        self.phase = MatchPhase::Idle;
    }

    fn cancel_pending(&mut self) {
        self.pending.cancel_all();
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(100)
    }

    fn drain_events(&mut self) -> Vec<MatchEvent> {
        self.events.drain()
    }
}
