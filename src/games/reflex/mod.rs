//! Quick Clicker: hit as many targets as possible before the clock runs out.
//!
//! - Each round lasts 10 seconds, counted down in 0.1 second ticks
//! - Targets come in three sizes; smaller targets are worth more points
//! - Every time the score passes through a multiple of ten the player
//!   earns half a second of extra time

mod config;
mod game;
mod target;

pub use config::ReflexConfig;
pub use game::{ReflexEngine, ReflexEvent, ReflexPhase};
pub use target::{SizeTier, Target};
