//! The three mini-game engines.

pub mod memory;
pub mod reflex;
pub mod words;
