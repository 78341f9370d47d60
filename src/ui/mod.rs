//! UI rendering.
//!
//! One frame is, top to bottom:
//! - Tab header naming both trees
//! - The active tree's page, scrolled to keep the focused control visible
//! - The console panel fed by the tracing layer
//! - Key hints
//!
//! Hit areas are rebuilt on every draw so mouse clicks always resolve
//! against what is on screen.

pub mod document;
pub mod hit_area;
mod panels;
pub mod theme;

pub use document::{ControlSpan, Document};
pub use hit_area::{HitArea, HitAreaRegistry};
pub use panels::console_height;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use panels::{render_body, render_console, render_footer, render_tabs};

/// Render the whole screen.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.hit_areas.clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                          // Tabs
            Constraint::Min(3),                             // Page
            Constraint::Length(console_height(area.height)), // Console
            Constraint::Length(1),                          // Key hints
        ])
        .split(area);

    render_tabs(frame, chunks[0], app.screen);
    render_body(frame, chunks[1], app);
    render_console(frame, chunks[2], &app.console);
    render_footer(frame, chunks[3]);
}
