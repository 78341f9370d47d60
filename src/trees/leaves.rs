//! Stateless leaf views.
//!
//! Each is a pure function from its input to a line of output.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{heading_style, subheading_style, COLOR_ACTIVE, COLOR_DIM};
use crate::view::RenderContext;

/// Title banner shown above the practice page.
pub fn banner(title: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled("\u{25c6} ", Style::default().fg(COLOR_ACTIVE)),
        Span::styled(
            title.to_string(),
            Style::default().fg(COLOR_ACTIVE).add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn greeting(title: &str) -> Line<'static> {
    Line::from(Span::styled(title.to_string(), heading_style()))
}

pub fn footer() -> Line<'static> {
    Line::from(Span::styled(
        "React Practice Completed \u{2714}",
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
    ))
}

/// Context consumer: reads the theme from the nearest provider.
pub fn theme_display(ctx: &RenderContext) -> Line<'static> {
    let label = ctx.theme().map(|t| t.label()).unwrap_or_default();
    Line::from(format!("Current Theme: {}", label))
}

/// Body of the memoized child.
pub fn child_value(value: i64) -> Line<'static> {
    Line::from(Span::styled(
        format!("Child Value: {}", value),
        subheading_style(),
    ))
}
