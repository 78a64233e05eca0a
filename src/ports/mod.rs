//! Boundaries between the engines' host and the outside world.
//!
//! - [`ScorePort`]: best score per game, surviving across sessions
//! - [`NotificationPort`]: fire-and-forget toast-style messages
//!
//! Engines never see these; the host routes engine events to them.

mod notify;
mod score;
mod store;

pub use notify::{Notification, NotificationPort, RecordingNotifier, Severity, TracingNotifier};
pub use score::{BestScores, ScorePort};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
