//! Engine trait and event plumbing shared by the mini-games.
//!
//! Each game implements [`Engine`] so a host can drive any of them the
//! same way: `start`, periodic `tick`s, an optional early `end`, and a
//! drain of emitted events after every command.

mod events;
mod traits;

pub use events::EventQueue;
pub use traits::Engine;
