//! Logging pipeline.
//!
//! `tracing` macros are used everywhere; [`init_tracing`] wires them to an
//! optional log file and to the [`ConsoleBuffer`] shown in the UI.

mod console;
mod init;
mod layer;

pub use console::{ConsoleBuffer, ConsoleEntry, DEFAULT_CONSOLE_CAPACITY};
pub use init::init_tracing;
pub use layer::ConsoleLayer;
