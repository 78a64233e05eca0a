//! Cancellable delayed tasks on a virtual clock.
//!
//! Engines never block or spawn timers. Anything that must happen "later"
//! (e.g. flipping a mismatched pair back face down) is queued here and fires
//! when the owner advances the clock from its `tick` handler.
//!
//! ## Ordering
//!
//! Tasks fire in due-time order; tasks due at the same instant fire in the
//! order they were scheduled.
//!
//! ## Cancellation
//!
//! Every task has a [`TaskId`]. Owners cancel individual tasks or clear the
//! whole schedule when a session is replaced, so a stale task can never
//! mutate a newer session.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Handle to a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl TaskId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    id: TaskId,
    due: Duration,
    task: T,
}

/// A queue of delayed tasks driven by an explicit clock.
#[derive(Clone, Debug)]
pub struct Schedule<T> {
    now: Duration,
    next_id: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Schedule<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Schedule<T> {
    /// Create an empty schedule with its clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Queue `task` to fire once `delay` has elapsed.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            due: self.now.saturating_add(delay),
            task,
        });
        id
    }

    /// Cancel a single task. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Cancel every pending task. Returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        dropped
    }

    /// Number of tasks still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is waiting.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    /// Time until the earliest pending task is due, if any.
    #[must_use]
    pub fn next_due_in(&self) -> Option<Duration> {
        self.entries
            .iter()
            .map(|e| e.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward and return every task that became due.
    ///
    /// The clock saturates at `Duration::MAX`.
    pub fn advance(&mut self, delta: Duration) -> Vec<T> {
        self.now = self.now.saturating_add(delta);
        let now = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.entries.drain(..).partition(|e| e.due <= now);
        self.entries = pending;

        due.sort_by_key(|e| (e.due, e.id));
        due.into_iter().map(|e| e.task).collect()
    }
}
