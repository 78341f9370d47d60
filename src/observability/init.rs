//! Tracing initialization and subscriber setup.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::console::ConsoleBuffer;
use super::layer::ConsoleLayer;
use crate::config::{DeckConfig, DEFAULT_LOG_FILTER};
use crate::error::{DeckError, DeckResult};

/// Installs the global subscriber.
///
/// Pipeline:
/// 1. `EnvFilter` built from `config.log_filter` (falls back to `info`)
/// 2. Optional plain-text `fmt` layer appending to `config.log_file`
/// 3. [`ConsoleLayer`] feeding the in-app console panel
///
/// Fails if the log file cannot be opened or a global subscriber is
/// already installed.
pub fn init_tracing(config: &DeckConfig, console: &ConsoleBuffer) -> DeckResult<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let file_layer = match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(true)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(ConsoleLayer::new(console.clone()))
        .try_init()
        .map_err(|e| DeckError::Logging(e.to_string()))
}
