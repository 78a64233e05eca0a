//! Host session integration tests: routing events to scores and notifications.

use std::time::Duration;

use rust_minigames::core::GameId;
use rust_minigames::engine::Engine;
use rust_minigames::games::memory::{MatchConfig, MatchEngine, MatchPhase};
use rust_minigames::games::reflex::{ReflexConfig, ReflexEngine, SizeTier, Target};
use rust_minigames::games::words::{WordConfig, WordEngine};
use rust_minigames::core::GameRng;
use rust_minigames::host::{Finish, HostedEvent, Session};
use rust_minigames::ports::{
    BestScores, JsonFileStore, KeyValueStore, MemoryStore, RecordingNotifier, ScorePort, Severity,
};

type TestSession<E> = Session<E, BestScores<MemoryStore>, RecordingNotifier>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("rust_minigames=debug")
        .with_test_writer()
        .try_init();
}

fn abab() -> MatchEngine {
    let config = MatchConfig::default().with_alphabet(["A", "B"]).unshuffled();
    MatchEngine::new(config, 1).unwrap()
}

fn session<E>(engine: E) -> TestSession<E>
where
    E: Engine,
    E::Event: HostedEvent,
{
    Session::new(engine, BestScores::new(MemoryStore::new()), RecordingNotifier::new())
}

fn scores_with(game: GameId, value: &str) -> BestScores<MemoryStore> {
    let mut store = MemoryStore::new();
    store.set(game.storage_key(), value.to_string()).unwrap();
    BestScores::new(store)
}

// =============================================================================
// Memory Match
// =============================================================================

/// First completion is always a new best.
#[test]
fn test_match_first_completion_is_best() {
    init_tracing();
    let mut session = session(abab());
    session.start();

    session.flip(0);
    session.flip(1);
    session.advance(Duration::from_millis(1000));
    session.flip(0);
    session.flip(2);
    session.advance(Duration::from_millis(500));
    session.flip(1);
    session.flip(3);
    session.advance(Duration::from_millis(500));

    assert_eq!(session.engine().phase(), MatchPhase::Complete);
    assert_eq!(session.last_finish(), Some(Finish { score: 3, improved: true }));
    assert_eq!(session.best(), Some(3));
    assert_eq!(session.scores().best(GameId::MemoryMatch), Some(3));

    let last = session.notifier().last().unwrap();
    assert_eq!(last.title, "New High Score!");
    assert_eq!(last.message, "You completed the game in 3 moves!");
    assert_eq!(session.notifier().received.len(), 1);
}

/// More moves than the stored best is not an improvement.
#[test]
fn test_match_worse_than_best_keeps_best() {
    let scores = scores_with(GameId::MemoryMatch, "2");
    let mut session = Session::new(abab(), scores, RecordingNotifier::new());
    assert_eq!(session.best(), Some(2));
    session.start();

    for (a, b) in [(0, 1), (0, 2), (1, 3)] {
        session.flip(a);
        session.flip(b);
        session.advance(Duration::from_secs(1));
    }

    assert_eq!(session.last_finish(), Some(Finish { score: 3, improved: false }));
    assert_eq!(session.scores().best(GameId::MemoryMatch), Some(2));
    assert_eq!(session.notifier().last().unwrap().title, "Game Completed!");
}

/// Tearing down during evaluation cancels the pending resolution.
#[test]
fn test_teardown_cancels_pending_flip() {
    let mut session = session(abab());
    session.start();
    session.flip(0);
    session.flip(2);
    session.teardown();

    let (mut engine, scores, notifier) = session.into_parts();
    engine.tick(5.0);
    assert!(engine.matched().is_empty());
    assert!(engine.drain_events().is_empty());
    assert_eq!(scores.best(GameId::MemoryMatch), None);
    assert!(notifier.received.is_empty());
}

// =============================================================================
// Quick Clicker
// =============================================================================

/// Wall-clock time is converted to 0.1s ticks; the round ends on time.
#[test]
fn test_reflex_round_ends_and_persists() {
    init_tracing();
    let mut session = session(ReflexEngine::with_seed(3));
    session.start();
    session.hit_target();
    let score = i64::from(session.engine().score());

    session.advance(Duration::from_millis(4_950));
    assert!(session.engine().is_running());
    session.advance(Duration::from_millis(5_050));
    assert!(!session.engine().is_running());

    assert_eq!(session.best(), Some(score));
    let last = session.notifier().last().unwrap();
    assert_eq!(last.title, "New High Score!");
    assert_eq!(last.message, format!("You scored {score} points!"));
}

/// A zero-point round against no stored best is just "Game Over".
#[test]
fn test_reflex_zero_score_is_not_a_best() {
    let mut session = session(ReflexEngine::with_seed(3));
    session.start();
    session.end();

    assert_eq!(session.best(), None);
    assert_eq!(session.scores().store().get("quickClickerBestScore"), None);
    let last = session.notifier().last().unwrap();
    assert_eq!(last.title, "Game Over");
    assert_eq!(last.message, "Final score: 0");
}

/// The bonus toast reaches the notifier.
#[test]
fn test_reflex_bonus_toast() {
    let mut session = session(ReflexEngine::with_seed(3));
    session.start();
    for _ in 0..10 {
        session.act(|e| e.set_target(Target { x: 100.0, y: 100.0, tier: SizeTier::Large }));
        session.hit_target();
    }

    assert_eq!(session.notifier().titles(), vec!["Bonus!"]);
    assert_eq!(session.notifier().last().unwrap().duration_ms, 1000);
}

// =============================================================================
// Word Scramble
// =============================================================================

/// Wrong guesses raise error toasts; a better score is persisted to disk.
#[test]
fn test_word_session_with_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.json");

    {
        let engine = WordEngine::new(WordConfig::default().with_words(["SCORE"]), 2).unwrap();
        let scores = BestScores::new(JsonFileStore::open(&path));
        let mut session = Session::new(engine, scores, RecordingNotifier::new());
        session.start();
        session.submit_guess("SOCRE");
        session.submit_guess("score");
        session.advance(Duration::from_secs(40));

        let severities: Vec<_> = session.notifier().received.iter().map(|n| n.severity).collect();
        assert_eq!(severities, vec![Severity::Error, Severity::Info, Severity::Info]);
        assert_eq!(
            session.notifier().titles(),
            vec!["Incorrect", "Correct!", "New High Score!"]
        );
    }

    let reopened = BestScores::new(JsonFileStore::open(&path));
    assert_eq!(reopened.best(GameId::WordScramble), Some(3));
}

/// A corrupt stored best is treated as absent.
#[test]
fn test_word_unparseable_best_is_absent() {
    let engine = WordEngine::new(WordConfig::default().with_words(["FUN"]), 2).unwrap();
    let scores = scores_with(GameId::WordScramble, "lots");
    let mut session = Session::new(engine, scores, RecordingNotifier::new());
    assert_eq!(session.best(), None);

    session.start();
    session.submit_guess("fun");
    session.end();
    assert_eq!(session.best(), Some(2));
    assert_eq!(session.scores().best(GameId::WordScramble), Some(2));
}

/// Restarting clears the last result.
#[test]
fn test_restart_clears_last_finish() {
    let engine = WordEngine::with_seed(1);
    let mut session = session(engine);
    session.start();
    session.end();
    assert!(session.last_finish().is_some());

    session.start();
    assert!(session.last_finish().is_none());
    assert!(session.engine().is_running());
}

/// Events raised through `engine_mut` are routed on the next pump.
#[test]
fn test_engine_mut_events_wait_for_pump() {
    let engine = WordEngine::new(WordConfig::default().with_words(["FUN"]), 2).unwrap();
    let mut session = session(engine);
    session.start();

    session.engine_mut().submit_guess("nope");
    assert!(session.notifier().received.is_empty());

    session.pump();
    assert_eq!(session.notifier().titles(), vec!["Incorrect"]);
}

// =============================================================================
// Seeding
// =============================================================================

/// A session started from entropy can be replayed from its engine's seed.
#[test]
fn test_entropy_session_replays_from_seed() {
    let engine = ReflexEngine::from_rng(ReflexConfig::default(), GameRng::from_entropy()).unwrap();
    let mut live = session(engine);
    let mut replay = session(ReflexEngine::with_seed(live.engine().seed()));
    live.start();
    replay.start();

    for _ in 0..15 {
        assert_eq!(live.engine().target(), replay.engine().target());
        assert_eq!(live.hit_target(), replay.hit_target());
    }
    assert_eq!(live.engine().score(), replay.engine().score());
    assert_eq!(live.notifier().titles(), replay.notifier().titles());
}

/// A bad config is rejected before any randomness is used.
#[test]
fn test_from_rng_validates_config() {
    let config = MatchConfig::default().with_alphabet(["A"]);
    assert!(MatchEngine::from_rng(config, GameRng::from_entropy()).is_err());

    let words = WordConfig::default().with_words(["game"]);
    let engine = WordEngine::from_rng(words, GameRng::new(5)).unwrap();
    assert_eq!(engine.config().words, vec!["GAME".to_string()]);
    assert_eq!(engine.seed(), 5);
}
