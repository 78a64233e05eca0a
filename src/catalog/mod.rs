//! Menu metadata for the game picker.
//!
//! Only the text a menu card shows; icons, colours and routes belong to
//! the UI.

use serde::Serialize;

use crate::core::GameId;

/// One entry on the game menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct GameInfo {
    pub id: GameId,
    pub title: &'static str,
    pub description: &'static str,
    /// URL-safe short name.
    pub slug: &'static str,
}

static CATALOG: [GameInfo; 3] = [
    GameInfo {
        id: GameId::MemoryMatch,
        title: "Memory Match",
        description: "Test your memory by matching pairs of cards. \
                      Complete the game in as few moves as possible!",
        slug: "memory-match",
    },
    GameInfo {
        id: GameId::WordScramble,
        title: "Word Scramble",
        description: "Unscramble words against the clock. \
                      Every correct answer gives you more time!",
        slug: "word-scramble",
    },
    GameInfo {
        id: GameId::QuickClicker,
        title: "Quick Clicker",
        description: "Test your reflexes by clicking targets as quickly as possible \
                      before time runs out.",
        slug: "quick-clicker",
    },
];

/// All games, in menu order.
#[must_use]
pub fn catalog() -> &'static [GameInfo] {
    &CATALOG
}

/// Look a game up by slug.
#[must_use]
pub fn find_by_slug(slug: &str) -> Option<&'static GameInfo> {
    CATALOG.iter().find(|g| g.slug == slug)
}

/// Metadata for a game.
#[must_use]
pub fn info(id: GameId) -> &'static GameInfo {
    match id {
        GameId::MemoryMatch => &CATALOG[0],
        GameId::WordScramble => &CATALOG[1],
        GameId::QuickClicker => &CATALOG[2],
    }
}
