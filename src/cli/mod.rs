//! CLI entry points that run before the TUI starts.

pub mod args;

pub use args::{parse_args, CliCommand, USAGE};
