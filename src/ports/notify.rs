//! Toast-style notifications.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default display time when a notification does not ask for one.
pub const DEFAULT_DURATION_MS: u64 = 5000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[default]
    Info,
    Error,
}

/// A message for the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u64,
}

impl Notification {
    /// An informational notification with the default duration.
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            severity: Severity::Info,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    /// An error notification with the default duration.
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            ..Self::info(title, message)
        }
    }

    /// Set how long the notification stays up.
    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Fire-and-forget sink for notifications.
pub trait NotificationPort {
    fn notify(&mut self, notification: Notification);
}

/// Keeps every notification. Handy for tests and for hosts that render
/// a notification list themselves.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    pub received: Vec<Notification>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Titles in arrival order.
    #[must_use]
    pub fn titles(&self) -> Vec<&str> {
        self.received.iter().map(|n| n.title.as_str()).collect()
    }

    /// Most recent notification.
    #[must_use]
    pub fn last(&self) -> Option<&Notification> {
        self.received.last()
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify(&mut self, notification: Notification) {
        self.received.push(notification);
    }
}

/// Writes notifications to the `tracing` log.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl NotificationPort for TracingNotifier {
    fn notify(&mut self, n: Notification) {
        match n.severity {
            Severity::Info => {
                info!(title = %n.title, duration_ms = n.duration_ms, "{}", n.message)
            }
            Severity::Error => {
                warn!(title = %n.title, duration_ms = n.duration_ms, "{}", n.message)
            }
        }
    }
}
