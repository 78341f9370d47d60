//! Crate-wide error type.
//!
//! State transitions and rendering are total, so the only failures are at
//! the edges: the outbound fetch, terminal I/O, and startup configuration.

use thiserror::Error;

use crate::traits::HttpError;

/// Errors surfaced by hooks-deck.
#[derive(Debug, Error)]
pub enum DeckError {
    /// The outbound fetch failed.
    #[error("fetch failed: {0}")]
    Http(#[from] HttpError),

    /// Terminal or log-file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value could not be used.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The global tracing subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),
}

/// Result alias using [`DeckError`].
pub type DeckResult<T> = Result<T, DeckError>;
