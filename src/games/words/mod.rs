//! Word Scramble: unscramble as many words as possible in 30 seconds.
//!
//! - A correct answer scores half the word length (rounded up, at least 1)
//! - A correct answer also adds 3 seconds, never above the starting 30
//! - Wrong answers cost nothing but the time spent typing them

mod config;
mod game;
mod puzzle;

pub use config::{WordConfig, DEFAULT_WORDS};
pub use game::{GuessResult, WordEngine, WordEvent, WordPhase};
pub use puzzle::WordPuzzle;
