//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::TestAppBuilder;
//!
//! let app = TestAppBuilder::new().with_screen(Screen::Concepts).build();
//! ```

#![allow(dead_code)]

use std::sync::Arc;

use hooks_deck::adapters::{MockHttpClient, MockResponse};
use hooks_deck::app::{App, Screen};
use hooks_deck::config::DeckConfig;
use hooks_deck::observability::ConsoleBuffer;
use hooks_deck::view::{ControlId, ViewEvent};

/// URL the test fetches are pointed at.
pub const TEST_FETCH_URL: &str = "http://deck.test/posts/1";

/// Builder for started test App instances backed by a mock HTTP client.
pub struct TestAppBuilder {
    config: DeckConfig,
    http: MockHttpClient,
    console: ConsoleBuffer,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: DeckConfig::default().with_fetch_url(TEST_FETCH_URL),
            http: MockHttpClient::new(),
            console: ConsoleBuffer::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.config = self.config.with_initial_screen(screen);
        self
    }

    /// Canned response for the test fetch URL.
    pub fn with_fetch_response(self, response: MockResponse) -> Self {
        self.http.set_response(TEST_FETCH_URL, response);
        self
    }

    /// Handle on the mock client; shares state with the one given to the app.
    pub fn http(&self) -> MockHttpClient {
        self.http.clone()
    }

    pub fn console(&self) -> ConsoleBuffer {
        self.console.clone()
    }

    /// Build and mount the initial tree.
    pub fn build(self) -> App {
        let mut app = App::new(&self.config, Arc::new(self.http), self.console);
        app.start();
        app
    }
}

/// A started app on the practice tree.
pub fn test_app() -> App {
    TestAppBuilder::new().build()
}

/// A started app on the concepts tree.
pub fn concepts_app() -> App {
    TestAppBuilder::new().with_screen(Screen::Concepts).build()
}

pub fn click(app: &mut App, id: ControlId) {
    app.dispatch(ViewEvent::Click(id));
}

/// Focus `id` and type `text` into it.
pub fn type_into(app: &mut App, id: ControlId, text: &str) {
    click(app, id);
    for ch in text.chars() {
        app.dispatch(ViewEvent::Insert(ch));
    }
}

/// Clear the input `id` by backspacing over `len` characters.
pub fn clear_input(app: &mut App, id: ControlId, len: usize) {
    click(app, id);
    for _ in 0..len {
        app.dispatch(ViewEvent::Backspace);
    }
}

/// Build the active tree once, discarding the output.
pub fn render(app: &mut App) {
    app.build_document();
}

/// Unstyled page lines of the active tree.
pub fn page(app: &mut App) -> Vec<String> {
    app.build_document().plain_lines()
}

pub fn page_contains(app: &mut App, needle: &str) -> bool {
    page(app).iter().any(|line| line.contains(needle))
}
