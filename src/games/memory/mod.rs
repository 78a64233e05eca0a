//! Memory Match: flip two cards at a time and find every pair.
//!
//! - The deck is a fixed alphabet of symbols, each appearing twice, shuffled
//! - Flipping a second card costs one move and starts an evaluation delay
//! - Equal symbols stay face up after 500ms; others flip back after 1000ms
//! - The game completes when every card is matched; fewer moves is better

mod config;
mod game;

pub use config::{MatchConfig, DEFAULT_SYMBOLS};
pub use game::{Card, MatchEngine, MatchEvent, MatchPhase, MatchView};
