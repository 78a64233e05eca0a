//! Host-side glue between engines and ports.
//!
//! A [`Session`] owns one engine, a [`ScorePort`](crate::ports::ScorePort)
//! and a [`NotificationPort`](crate::ports::NotificationPort). The UI calls
//! the session; the session calls the engine, then routes the engine's
//! events to the ports.
//!
//! ```
//! use rust_minigames::games::words::{WordConfig, WordEngine};
//! use rust_minigames::host::Session;
//! use rust_minigames::ports::{BestScores, MemoryStore, RecordingNotifier};
//!
//! let engine = WordEngine::new(WordConfig::default().with_words(["GAME"]), 42).unwrap();
//! let scores = BestScores::new(MemoryStore::new());
//! let mut session = Session::new(engine, scores, RecordingNotifier::new());
//!
//! session.start();
//! session.submit_guess("game");
//! session.end();
//!
//! assert_eq!(session.best(), Some(2));
//! assert_eq!(session.notifier().titles(), vec!["Correct!", "New High Score!"]);
//! ```

mod routing;
mod session;
mod ticker;

pub use routing::{finish_notice, HostedEvent, Outcome, QUICK_TOAST_MS};
pub use session::{Finish, Session};
pub use ticker::Ticker;
