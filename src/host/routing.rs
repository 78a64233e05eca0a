//! What the host does with each engine event.

use crate::core::GameId;
use crate::games::memory::MatchEvent;
use crate::games::reflex::ReflexEvent;
use crate::games::words::WordEvent;
use crate::ports::Notification;

/// Short-lived toasts (bonus, correct, incorrect) stay up this long.
pub const QUICK_TOAST_MS: u64 = 1000;

/// Host-side meaning of an engine event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to show.
    Silent,
    /// Show this notification.
    Notify(Notification),
    /// The session finished with this score; compare and persist.
    Finished(i64),
}

/// Events a [`Session`](super::Session) knows how to route.
pub trait HostedEvent {
    fn outcome(&self) -> Outcome;
}

impl HostedEvent for MatchEvent {
    fn outcome(&self) -> Outcome {
        match self {
            MatchEvent::Matched { .. } | MatchEvent::Mismatch { .. } => Outcome::Silent,
            MatchEvent::GameCompleted { moves } => Outcome::Finished(i64::from(*moves)),
        }
    }
}

impl HostedEvent for ReflexEvent {
    fn outcome(&self) -> Outcome {
        match self {
            ReflexEvent::Bonus { bonus_ms } => {
                let secs = *bonus_ms as f64 / 1000.0;
                Outcome::Notify(
                    Notification::info("Bonus!", format!("+{secs} seconds"))
                        .with_duration_ms(QUICK_TOAST_MS),
                )
            }
            ReflexEvent::GameEnded { score } => Outcome::Finished(i64::from(*score)),
        }
    }
}

impl HostedEvent for WordEvent {
    fn outcome(&self) -> Outcome {
        match self {
            WordEvent::Correct { points } => Outcome::Notify(
                Notification::info("Correct!", format!("+{points} points"))
                    .with_duration_ms(QUICK_TOAST_MS),
            ),
            WordEvent::Incorrect => Outcome::Notify(
                Notification::error("Incorrect", "Try again!").with_duration_ms(QUICK_TOAST_MS),
            ),
            WordEvent::GameEnded { score } => Outcome::Finished(i64::from(*score)),
        }
    }
}

/// The end-of-session notification for `game`.
#[must_use]
pub fn finish_notice(game: GameId, score: i64, improved: bool) -> Notification {
    match (game, improved) {
        (GameId::MemoryMatch, true) => Notification::info(
            "New High Score!",
            format!("You completed the game in {score} moves!"),
        ),
        (GameId::MemoryMatch, false) => Notification::info(
            "Game Completed!",
            format!("You completed the game in {score} moves!"),
        ),
        (_, true) => Notification::info("New High Score!", format!("You scored {score} points!")),
        (_, false) => Notification::info("Game Over", format!("Final score: {score}")),
    }
}
