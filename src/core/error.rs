//! Error types.
//!
//! Engine commands never fail: invalid commands are ignored. The only
//! errors are malformed configuration (caught at construction) and
//! storage failures inside persistence adapters.

use std::path::PathBuf;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A game configuration that cannot produce a playable session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("memory match needs at least 2 distinct symbols, got {0}")]
    TooFewSymbols(usize),

    #[error("symbol {0:?} appears more than once in the alphabet")]
    DuplicateSymbol(String),

    #[error("symbols must be non-empty")]
    EmptySymbol,

    #[error("word list is empty")]
    NoWords,

    #[error("word {0:?} must be non-empty and alphabetic")]
    InvalidWord(String),

    #[error("play area {width}x{height} is too small for a {margin} margin")]
    PlayAreaTooSmall { width: f64, height: f64, margin: f64 },

    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),

    #[error("bonus interval must be at least one hit")]
    ZeroBonusInterval,
}

/// Failure inside a key/value storage adapter.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode scores: {0}")]
    Encode(#[from] serde_json::Error),
}
