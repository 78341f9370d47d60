//! Color theme constants.

use ratatui::style::{Color, Modifier, Style};
use tracing::Level;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for section headings
pub const COLOR_ACCENT: Color = Color::White;

/// Page title color
pub const COLOR_HEADER: Color = Color::White;

/// Banner / active tab color
pub const COLOR_ACTIVE: Color = Color::LightGreen;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Focused control highlight
pub const COLOR_FOCUS: Color = Color::Rgb(0, 122, 204);

/// The inline-styled note
pub const COLOR_NOTE: Color = Color::Blue;

/// Console level colors
pub const COLOR_LOG_ERROR: Color = Color::Red;
pub const COLOR_LOG_WARN: Color = Color::Yellow;
pub const COLOR_LOG_INFO: Color = Color::Rgb(4, 181, 117);
pub const COLOR_LOG_DEBUG: Color = Color::Gray;

pub fn title_style() -> Style {
    Style::default()
        .fg(COLOR_HEADER)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn heading_style() -> Style {
    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
}

pub fn subheading_style() -> Style {
    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::ITALIC)
}

pub fn button_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::White)
            .bg(COLOR_FOCUS)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT)
    }
}

pub fn input_style(focused: bool) -> Style {
    let style = Style::default().bg(COLOR_INPUT_BG);
    if focused {
        style.fg(Color::White)
    } else {
        style.fg(Color::Gray)
    }
}

pub fn level_color(level: Level) -> Color {
    match level {
        Level::ERROR => COLOR_LOG_ERROR,
        Level::WARN => COLOR_LOG_WARN,
        Level::INFO => COLOR_LOG_INFO,
        _ => COLOR_LOG_DEBUG,
    }
}
