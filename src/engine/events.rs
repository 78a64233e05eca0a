//! Outbox for engine events.

use serde::{Deserialize, Serialize};

/// Events emitted by an engine and not yet collected by the host.
///
/// Engines push; hosts drain after each command or tick. Order is
/// emission order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventQueue<E> {
    pending: Vec<E>,
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventQueue<E> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self { pending: Vec::new() }
    }

    /// Record an event.
    pub fn emit(&mut self, event: E) {
        self.pending.push(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }

    /// Pending events without consuming them.
    #[must_use]
    pub fn peek(&self) -> &[E] {
        &self.pending
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// True if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending event.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
