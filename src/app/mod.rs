//! Application state.
//!
//! [`App`] owns both demo trees, routes input to whichever is active, and
//! runs the effects they request. Async work reports back through the
//! [`AppMessage`] channel, which the event loop drains into
//! [`App::handle_message`].

mod fetch;
mod handlers;
mod messages;
mod types;

pub use fetch::{fetch_body, spawn_fetch, Post};
pub use messages::AppMessage;
pub use types::{FetchOutcome, Screen};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::DeckConfig;
use crate::observability::ConsoleBuffer;
use crate::traits::HttpClient;
use crate::trees::{ConceptsView, PracticeView};
use crate::ui::{Document, HitAreaRegistry};
use crate::view::{with_logger, Effect, RenderContext, View, ViewEvent, WithLogger};

/// Rows moved per PageUp/PageDown.
pub const PAGE_SCROLL: u16 = 5;

/// Rows moved per mouse wheel notch.
pub const WHEEL_SCROLL: u16 = 3;

/// Main application state
pub struct App {
    /// Tree currently on screen
    pub screen: Screen,
    pub practice: PracticeView,
    /// Concepts tree behind the lifecycle-logging wrapper
    pub concepts: WithLogger<ConceptsView>,
    http: Arc<dyn HttpClient>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Flag indicating the UI needs to be redrawn
    pub needs_redraw: bool,
    pub should_quit: bool,
    /// Clickable controls from the last frame
    pub hit_areas: HitAreaRegistry,
    /// In-app console fed by the tracing layer
    pub console: ConsoleBuffer,
    /// First visible row of the page
    pub scroll: u16,
    /// Scroll the focused control into view on the next draw
    pub follow_focus: bool,
    seen_console_version: u64,
    /// Outcome of the most recent fetch, if one has finished
    pub last_fetch: Option<FetchOutcome>,
    /// Fetches started since launch
    pub fetches_started: u64,
}

impl App {
    pub fn new(config: &DeckConfig, http: Arc<dyn HttpClient>, console: ConsoleBuffer) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: config.initial_screen,
            practice: PracticeView::new(),
            concepts: with_logger(ConceptsView::new(config.fetch_url.clone())),
            http,
            message_tx,
            message_rx: Some(message_rx),
            needs_redraw: true,
            should_quit: false,
            hit_areas: HitAreaRegistry::new(),
            console,
            scroll: 0,
            follow_focus: false,
            seen_console_version: 0,
            last_fetch: None,
            fetches_started: 0,
        }
    }

    /// Mount the initial tree.
    pub fn start(&mut self) {
        tracing::debug!(tree = %self.screen, "starting");
        self.active_view_mut().mount();
        self.mark_dirty();
    }

    /// Unmount whatever is on screen.
    pub fn shutdown(&mut self) {
        self.active_view_mut().unmount();
    }

    /// Replace the active tree, running unmount then mount.
    ///
    /// The incoming tree is rebuilt before it mounts, so it starts from
    /// default state; nothing from an earlier mount carries over.
    pub fn switch_to(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        self.active_view_mut().unmount();
        self.screen = screen;
        self.scroll = 0;
        self.rebuild_active();
        self.active_view_mut().mount();
        tracing::debug!(tree = %screen, "switched tree");
        self.mark_dirty();
    }

    fn rebuild_active(&mut self) {
        match self.screen {
            Screen::Practice => self.practice = PracticeView::new(),
            Screen::Concepts => {
                let url = self.concepts.inner().fetch_url().to_string();
                self.concepts = with_logger(ConceptsView::new(url));
            }
        }
    }

    pub fn active_view(&self) -> &dyn View {
        match self.screen {
            Screen::Practice => &self.practice,
            Screen::Concepts => &self.concepts,
        }
    }

    pub fn active_view_mut(&mut self) -> &mut dyn View {
        match self.screen {
            Screen::Practice => &mut self.practice,
            Screen::Concepts => &mut self.concepts,
        }
    }

    /// Deliver an event to the active tree and run any effect it returns.
    pub fn dispatch(&mut self, event: ViewEvent) {
        let effect = self.active_view_mut().handle_event(event);
        self.follow_focus = true;
        self.mark_dirty();
        if let Some(effect) = effect {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Fetch { url } => {
                self.fetches_started += 1;
                tracing::debug!(url = %url, "spawning fetch");
                spawn_fetch(Arc::clone(&self.http), url, self.message_tx.clone());
            }
        }
    }

    /// Render the active tree into a fresh document.
    pub fn build_document(&mut self) -> Document {
        let view = self.active_view_mut();
        let mut doc = Document::new(view.focused());
        view.build(&RenderContext::root(), &mut doc);
        doc
    }

    pub fn take_message_receiver(&mut self) -> Option<mpsc::UnboundedReceiver<AppMessage>> {
        self.message_rx.take()
    }

    /// Sender half of the message channel, for tests and background tasks.
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll).saturating_add(delta).max(0);
        self.scroll = u16::try_from(next).unwrap_or(u16::MAX);
        self.follow_focus = false;
        self.mark_dirty();
    }

    /// Periodic housekeeping: redraw when new console output arrived.
    pub fn tick(&mut self) {
        let version = self.console.version();
        if version != self.seen_console_version {
            self.seen_console_version = version;
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;

    fn app() -> App {
        App::new(
            &DeckConfig::default(),
            Arc::new(MockHttpClient::new()),
            ConsoleBuffer::default(),
        )
    }

    #[test]
    fn test_new_app_starts_on_practice() {
        let app = app();
        assert_eq!(app.screen, Screen::Practice);
        assert!(app.needs_redraw);
        assert!(app.message_rx.is_some());
        assert_eq!(app.active_view().name(), "PracticeApp");
    }

    #[test]
    fn test_switch_to_same_screen_is_noop() {
        let mut app = app();
        app.start();
        app.switch_to(Screen::Practice);
        assert_eq!(app.practice.lifecycle().mount_count(), 1);
        assert_eq!(app.practice.lifecycle().unmount_count(), 0);
    }

    #[test]
    fn test_scroll_by_clamps_at_zero() {
        let mut app = app();
        app.scroll_by(4);
        assert_eq!(app.scroll, 4);
        app.scroll_by(-10);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_tick_marks_dirty_on_console_change() {
        let mut app = app();
        app.tick();
        app.needs_redraw = false;

        app.tick();
        assert!(!app.needs_redraw);

        app.console.log(tracing::Level::INFO, "test", "hello");
        app.tick();
        assert!(app.needs_redraw);
    }
}
