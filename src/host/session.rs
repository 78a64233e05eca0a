//! Session driver: one engine wired to the score and notification ports.

use std::time::Duration;

use tracing::{debug, warn};

use super::routing::{finish_notice, HostedEvent, Outcome};
use super::ticker::Ticker;
use crate::engine::Engine;
use crate::games::memory::MatchEngine;
use crate::games::reflex::ReflexEngine;
use crate::games::words::{GuessResult, WordEngine};
use crate::ports::{NotificationPort, ScorePort};

/// How the last session finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Finish {
    pub score: i64,
    pub improved: bool,
}

/// Drives one engine on behalf of a UI.
///
/// Every command is forwarded to the engine, then the engine's events are
/// routed: notifications go to the notifier, final scores are compared with
/// the best score loaded at construction and persisted when they improve it.
pub struct Session<E, S, N> {
    engine: E,
    scores: S,
    notifier: N,
    best: Option<i64>,
    ticker: Ticker,
    last_finish: Option<Finish>,
}

impl<E, S, N> Session<E, S, N>
where
    E: Engine,
    E::Event: HostedEvent,
    S: ScorePort,
    N: NotificationPort,
{
    pub fn new(engine: E, scores: S, notifier: N) -> Self {
        let best = scores.best(engine.game_id());
        let ticker = Ticker::new(engine.tick_interval());
        Self {
            engine,
            scores,
            notifier,
            best,
            ticker,
            last_finish: None,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Direct engine access. Events raised through it wait for the next
    /// `pump`; prefer `act`, which pumps for you.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Best score as known to this session.
    #[must_use]
    pub fn best(&self) -> Option<i64> {
        self.best
    }

    /// Result of the most recent finished session, cleared by `start`.
    #[must_use]
    pub fn last_finish(&self) -> Option<Finish> {
        self.last_finish
    }

    #[must_use]
    pub fn scores(&self) -> &S {
        &self.scores
    }

    #[must_use]
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Start (or restart) the game.
    pub fn start(&mut self) {
        self.ticker.reset();
        self.last_finish = None;
        self.engine.start();
        self.pump();
    }

    /// End the game early.
    pub fn end(&mut self) {
        self.ticker.reset();
        self.engine.end();
        self.pump();
    }

    /// Stop driving the engine: cancel its pending callbacks and discard
    /// unrouted events. Nothing is persisted or announced.
    pub fn teardown(&mut self) {
        self.ticker.reset();
        self.engine.cancel_pending();
        let dropped = self.engine.drain_events().len();
        debug!(game = %self.engine.game_id(), dropped, "session torn down");
    }

    /// Let wall-clock time pass. Issues as many fixed ticks as fit.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.engine.is_running() {
            self.ticker.reset();
            return;
        }
        let step = self.ticker.interval().as_secs_f64();
        for _ in 0..self.ticker.advance(elapsed) {
            self.engine.tick(step);
            if !self.engine.is_running() {
                self.ticker.reset();
                break;
            }
        }
        self.pump();
    }

    /// Run a game-specific command, then route its events.
    pub fn act<R>(&mut self, command: impl FnOnce(&mut E) -> R) -> R {
        let result = command(&mut self.engine);
        self.pump();
        result
    }

    /// Route every pending engine event.
    pub fn pump(&mut self) {
        for event in self.engine.drain_events() {
            match event.outcome() {
                Outcome::Silent => {}
                Outcome::Notify(notification) => self.notifier.notify(notification),
                Outcome::Finished(score) => self.finish(score),
            }
        }
    }

    fn finish(&mut self, score: i64) {
        let game = self.engine.game_id();
        let improved = game.score_order().is_improvement(score, self.best);
        if improved {
            self.best = Some(score);
            if let Err(e) = self.scores.record(game, score) {
                warn!(%game, score, error = %e, "could not persist best score");
            }
        }
        debug!(%game, score, improved, "session finished");
        self.notifier.notify(finish_notice(game, score, improved));
        self.last_finish = Some(Finish { score, improved });
    }

    /// Tear down and hand back the parts.
    pub fn into_parts(mut self) -> (E, S, N) {
        self.teardown();
        (self.engine, self.scores, self.notifier)
    }
}

impl<S: ScorePort, N: NotificationPort> Session<MatchEngine, S, N> {
    /// Flip a card.
    pub fn flip(&mut self, index: usize) {
        self.act(|engine| engine.flip(index));
    }
}

impl<S: ScorePort, N: NotificationPort> Session<ReflexEngine, S, N> {
    /// Hit the current target.
    pub fn hit_target(&mut self) -> Option<u32> {
        self.act(ReflexEngine::hit_target)
    }
}

impl<S: ScorePort, N: NotificationPort> Session<WordEngine, S, N> {
    /// Submit a guess.
    pub fn submit_guess(&mut self, text: &str) -> GuessResult {
        self.act(|engine| engine.submit_guess(text))
    }

    /// Skip to another word.
    pub fn skip(&mut self) {
        self.act(WordEngine::next_puzzle);
    }
}
