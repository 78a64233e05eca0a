//! Core engine types: RNG, scheduling, countdowns, game identifiers, errors.
//!
//! These are the shared building blocks every mini-game engine is made of.
//! None of them know about a particular game.

pub mod rng;
pub mod schedule;
pub mod countdown;
pub mod game_id;
pub mod error;

pub use rng::GameRng;
pub use schedule::{Schedule, TaskId};
pub use countdown::Countdown;
pub use game_id::{GameId, ScoreOrder};
pub use error::{ConfigError, StorageError, StorageResult};
