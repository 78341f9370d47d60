//! Bounded in-app console.
//!
//! The terminal is owned by the UI, so log lines cannot go to stdout. They
//! are captured here instead and rendered in the console panel, the same
//! way a browser console sits next to the page it logs for.

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;

/// Default number of retained console entries.
pub const DEFAULT_CONSOLE_CAPACITY: usize = 200;

/// One captured log line.
#[derive(Debug, Clone)]
pub struct ConsoleEntry {
    /// Local time the event was recorded
    pub timestamp: DateTime<Local>,
    /// Event level
    pub level: Level,
    /// Event target (module path unless overridden)
    pub target: String,
    /// Formatted message plus any extra fields
    pub message: String,
}

#[derive(Debug)]
struct ConsoleInner {
    entries: VecDeque<ConsoleEntry>,
    capacity: usize,
    version: u64,
}

/// Shared ring buffer of console entries.
///
/// Cloning is cheap; every clone sees the same entries.
#[derive(Debug, Clone)]
pub struct ConsoleBuffer {
    inner: Arc<Mutex<ConsoleInner>>,
}

impl ConsoleBuffer {
    /// Create a buffer that keeps at most `capacity` entries (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            inner: Arc::new(Mutex::new(ConsoleInner {
                entries: VecDeque::with_capacity(capacity),
                capacity,
                version: 0,
            })),
        }
    }

    // A panic while holding the lock leaves the entries intact, so recover them.
    fn lock(&self) -> MutexGuard<'_, ConsoleInner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Append an entry, evicting the oldest when full.
    pub fn push(&self, entry: ConsoleEntry) {
        let mut inner = self.lock();
        if inner.entries.len() == inner.capacity {
            inner.entries.pop_front();
        }
        inner.entries.push_back(entry);
        inner.version = inner.version.wrapping_add(1);
    }

    /// Convenience for recording a message without going through tracing.
    pub fn log(&self, level: Level, target: &str, message: impl Into<String>) {
        self.push(ConsoleEntry {
            timestamp: Local::now(),
            level,
            target: target.to_string(),
            message: message.into(),
        });
    }

    /// Snapshot of all retained entries, oldest first.
    pub fn entries(&self) -> Vec<ConsoleEntry> {
        self.lock().entries.iter().cloned().collect()
    }

    /// The newest `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<ConsoleEntry> {
        let inner = self.lock();
        let skip = inner.entries.len().saturating_sub(n);
        inner.entries.iter().skip(skip).cloned().collect()
    }

    /// Retained messages, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().entries.iter().map(|e| e.message.clone()).collect()
    }

    /// Whether any retained message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lock().entries.iter().any(|e| e.message.contains(needle))
    }

    /// Number of times `message` was logged verbatim (among retained entries).
    pub fn count_exact(&self, message: &str) -> usize {
        self.lock()
            .entries
            .iter()
            .filter(|e| e.message == message)
            .count()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Monotonic change counter; bumps on every push.
    pub fn version(&self) -> u64 {
        self.lock().version
    }

    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.entries.clear();
        inner.version = inner.version.wrapping_add(1);
    }
}

impl Default for ConsoleBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CONSOLE_CAPACITY)
    }
}
