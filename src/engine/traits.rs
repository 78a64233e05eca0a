//! The host-facing engine trait.

use std::time::Duration;

use crate::core::GameId;

/// Engine trait.
///
/// Games implement this trait so a host can drive them uniformly.
/// The game-specific action (`flip`, `hit_target`, `submit_guess`) stays
/// an inherent method on each engine.
///
/// ## Implementation Notes
///
/// - Every command is total: commands that make no sense in the current
///   phase are ignored, never reported as errors.
/// - `start` and `end` cancel anything scheduled by the previous session.
/// - `tick` takes seconds; negative or non-finite values are ignored.
/// - Engines never touch storage or notifications. They push events and
///   the host collects them with `drain_events`.
pub trait Engine {
    /// Events this engine emits.
    type Event: Clone + std::fmt::Debug;

    /// The engine's state machine.
    type Phase: Copy + PartialEq + std::fmt::Debug;

    /// Which game this is.
    fn game_id(&self) -> GameId;

    /// Current state.
    fn phase(&self) -> Self::Phase;

    /// True while a session is in progress (accepting actions or resolving).
    fn is_running(&self) -> bool;

    /// Begin a fresh session, discarding the previous one.
    fn start(&mut self);

    /// Advance time by `delta_secs` seconds.
    fn tick(&mut self, delta_secs: f64);

    /// Terminate the session early.
    fn end(&mut self);

    /// Drop every pending delayed callback without changing the phase.
    ///
    /// Hosts call this when tearing a session down.
    fn cancel_pending(&mut self);

    /// Fixed tick length the host should drive this engine with.
    fn tick_interval(&self) -> Duration;

    /// Collect emitted events, oldest first.
    fn drain_events(&mut self) -> Vec<Self::Event>;

    /// Run `ticks` fixed-length ticks.
    fn tick_n(&mut self, ticks: u32) {
        let step = self.tick_interval().as_secs_f64();
        for _ in 0..ticks {
            self.tick(step);
        }
    }
}
