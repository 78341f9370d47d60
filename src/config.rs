//! Runtime configuration.
//!
//! Everything has a default; environment variables only override.
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `HOOKS_DECK_LOG` | tracing filter directive (default `info`) |
//! | `HOOKS_DECK_LOG_FILE` | append plain-text logs to this file |
//! | `HOOKS_DECK_FETCH_URL` | URL used by the fetch action |

use std::path::PathBuf;

use crate::app::Screen;
use crate::error::{DeckError, DeckResult};
use crate::observability::DEFAULT_CONSOLE_CAPACITY;

/// Endpoint hit by the "Fetch API" button.
pub const DEFAULT_FETCH_URL: &str = "https://jsonplaceholder.typicode.com/posts/1";

/// Default tracing filter.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_LOG_FILTER: &str = "HOOKS_DECK_LOG";
pub const ENV_LOG_FILE: &str = "HOOKS_DECK_LOG_FILE";
pub const ENV_FETCH_URL: &str = "HOOKS_DECK_FETCH_URL";

/// Configuration for a hooks-deck session.
///
/// # Example
///
/// ```
/// use hooks_deck::app::Screen;
/// use hooks_deck::config::DeckConfig;
///
/// let config = DeckConfig::default()
///     .with_log_filter("debug")
///     .with_initial_screen(Screen::Concepts);
/// assert_eq!(config.initial_screen, Screen::Concepts);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    /// URL requested by the fetch action
    pub fetch_url: String,
    /// tracing filter directive
    pub log_filter: String,
    /// Optional log file (appended to)
    pub log_file: Option<PathBuf>,
    /// Maximum retained console entries
    pub console_capacity: usize,
    /// Tree shown at startup
    pub initial_screen: Screen,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            fetch_url: DEFAULT_FETCH_URL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: None,
            console_capacity: DEFAULT_CONSOLE_CAPACITY,
            initial_screen: Screen::Practice,
        }
    }
}

impl DeckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetch_url(mut self, url: impl Into<String>) -> Self {
        self.fetch_url = url.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_console_capacity(mut self, capacity: usize) -> Self {
        self.console_capacity = capacity;
        self
    }

    pub fn with_initial_screen(mut self, screen: Screen) -> Self {
        self.initial_screen = screen;
        self
    }

    /// Reject values that can never work.
    pub fn validate(&self) -> DeckResult<()> {
        let url = self.fetch_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(DeckError::Config(format!(
                "{} must be an http(s) URL, got '{}'",
                ENV_FETCH_URL, self.fetch_url
            )));
        }
        if self.console_capacity == 0 {
            return Err(DeckError::Config(
                "console capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Empty values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut config = Self::default();
        if let Some(filter) = get(ENV_LOG_FILTER) {
            config = config.with_log_filter(filter);
        }
        if let Some(path) = get(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        if let Some(url) = get(ENV_FETCH_URL) {
            config = config.with_fetch_url(url);
        }
        config
    }
}
