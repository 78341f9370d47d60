//! hooks-deck - two small stateful view trees in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod observability;
pub mod terminal;
pub mod traits;
pub mod trees;
pub mod ui;
pub mod view;
