//! # rust-minigames
//!
//! Pure state-machine engines for three casual mini-games.
//!
//! ## Design Principles
//!
//! 1. **Pure Engines**: Engines never do I/O. They change state in response
//!    to commands and ticks, and emit events describing what happened.
//!
//! 2. **Total Commands**: A command that makes no sense right now (flipping
//!    a matched card, guessing after time is up) is ignored, not an error.
//!    The only failure is a malformed configuration, caught at construction.
//!
//! 3. **Explicit Time**: Nothing sleeps or spawns timers. Delays live on a
//!    virtual clock that advances only when the host calls `tick`, and every
//!    pending delay is cancelled when a session starts or ends.
//!
//! ## Modules
//!
//! - `core`: RNG, schedule, countdown, game identifiers, errors
//! - `engine`: the `Engine` trait and event queue
//! - `games`: Memory Match, Quick Clicker, Word Scramble
//! - `ports`: best-score storage and notifications
//! - `host`: `Session`, which routes engine events to the ports
//! - `catalog`: menu metadata

pub mod core;
pub mod engine;
pub mod games;
pub mod ports;
pub mod host;
pub mod catalog;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Countdown, GameId, GameRng, Schedule, ScoreOrder, StorageError, TaskId,
};

pub use crate::engine::{Engine, EventQueue};

pub use crate::games::memory::{Card, MatchConfig, MatchEngine, MatchEvent, MatchPhase};
pub use crate::games::reflex::{
    ReflexConfig, ReflexEngine, ReflexEvent, ReflexPhase, SizeTier, Target,
};
pub use crate::games::words::{
    GuessResult, WordConfig, WordEngine, WordEvent, WordPhase, WordPuzzle,
};

pub use crate::ports::{
    BestScores, JsonFileStore, KeyValueStore, MemoryStore, Notification, NotificationPort,
    RecordingNotifier, ScorePort, Severity, TracingNotifier,
};

pub use crate::host::{Finish, HostedEvent, Session};

pub use crate::catalog::{catalog, GameInfo};
