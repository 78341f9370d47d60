//! Input and message handling for the App.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, AppMessage, FetchOutcome, Screen, PAGE_SCROLL, WHEEL_SCROLL};
use crate::error::DeckError;
use crate::view::ViewEvent;

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::FetchCompleted { url, body } => {
                tracing::info!("{}", body);
                self.last_fetch = Some(FetchOutcome::Succeeded { url, body });
            }
            AppMessage::FetchFailed { url, error } => {
                tracing::error!("{}", DeckError::from(error.clone()));
                self.last_fetch = Some(FetchOutcome::Failed { url, error });
            }
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.quit(),
            KeyCode::F(1) => self.switch_to(Screen::Practice),
            KeyCode::F(2) => self.switch_to(Screen::Concepts),
            KeyCode::Left if ctrl => self.switch_to(self.screen.prev()),
            KeyCode::Right if ctrl => self.switch_to(self.screen.next()),
            KeyCode::Tab => self.dispatch(ViewEvent::FocusNext),
            KeyCode::BackTab => self.dispatch(ViewEvent::FocusPrev),
            KeyCode::Enter => self.dispatch(ViewEvent::Activate),
            KeyCode::Backspace => self.dispatch(ViewEvent::Backspace),
            KeyCode::Esc => self.dispatch(ViewEvent::Blur),
            KeyCode::PageUp => self.scroll_by(-i32::from(PAGE_SCROLL)),
            KeyCode::PageDown => self.scroll_by(i32::from(PAGE_SCROLL)),
            KeyCode::Char(c) if !ctrl && !alt => self.dispatch(ViewEvent::Insert(c)),
            _ => {}
        }
    }

    /// Handle a mouse event against the hit areas of the last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(id) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    self.dispatch(ViewEvent::Click(id));
                }
            }
            MouseEventKind::ScrollDown => self.scroll_by(i32::from(WHEEL_SCROLL)),
            MouseEventKind::ScrollUp => self.scroll_by(-i32::from(WHEEL_SCROLL)),
            _ => {}
        }
    }
}
