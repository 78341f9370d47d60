//! Screen panels: tab header, page body, console and key hints.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs},
    Frame,
};

use super::theme::{level_color, COLOR_ACTIVE, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::{App, Screen};
use crate::observability::ConsoleBuffer;

/// Console rows as a share of the terminal height, in percent.
const CONSOLE_PERCENT: u16 = 30;
const CONSOLE_MIN_ROWS: u16 = 4;
const CONSOLE_MAX_ROWS: u16 = 12;

/// Height of the console panel, borders included.
pub fn console_height(total: u16) -> u16 {
    let rows = total.saturating_mul(CONSOLE_PERCENT) / 100;
    rows.clamp(CONSOLE_MIN_ROWS, CONSOLE_MAX_ROWS) + 2
}

fn panel(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            title,
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
}

pub fn render_tabs(frame: &mut Frame, area: Rect, active: Screen) {
    let titles: Vec<Line> = Screen::ALL
        .iter()
        .map(|screen| Line::from(format!("F{} {}", screen.index() + 1, screen.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(panel(" hooks-deck ".to_string()))
        .style(Style::default().fg(COLOR_DIM))
        .highlight_style(
            Style::default()
                .fg(COLOR_ACTIVE)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

/// Draw the active tree and register its controls for mouse hits.
pub fn render_body(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = panel(format!(" {} ", app.screen.title()));
    let inner = block.inner(area);
    let doc = app.build_document();

    let height = inner.height;
    if app.follow_focus {
        if let Some(row) = doc.focused().and_then(|id| doc.row_of(id)) {
            if row < app.scroll {
                app.scroll = row;
            } else if row >= app.scroll.saturating_add(height) {
                app.scroll = row.saturating_add(1).saturating_sub(height);
            }
        }
        app.follow_focus = false;
    }
    let max_scroll = u16::try_from(doc.len())
        .unwrap_or(u16::MAX)
        .saturating_sub(height);
    app.scroll = app.scroll.min(max_scroll);

    for (id, rect) in doc.hit_rects(inner, app.scroll) {
        app.hit_areas.register(rect, id);
    }

    let paragraph = Paragraph::new(doc.into_lines())
        .block(block)
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Newest console entries, oldest at the top.
pub fn render_console(frame: &mut Frame, area: Rect, console: &ConsoleBuffer) {
    let block = panel(" Console ".to_string());
    let visible = usize::from(block.inner(area).height);

    let lines: Vec<Line> = console
        .recent(visible)
        .into_iter()
        .map(|entry| {
            Line::from(vec![
                Span::styled(
                    entry.timestamp.format("%H:%M:%S ").to_string(),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(
                    format!("{:<5} ", entry.level.to_string()),
                    Style::default().fg(level_color(entry.level)),
                ),
                Span::raw(entry.message),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::styled("Tab", Style::default().fg(COLOR_ACTIVE)),
        Span::raw(" focus  "),
        Span::styled("Enter", Style::default().fg(COLOR_ACTIVE)),
        Span::raw(" press  "),
        Span::styled("F1/F2", Style::default().fg(COLOR_ACTIVE)),
        Span::raw(" tree  "),
        Span::styled("PgUp/PgDn", Style::default().fg(COLOR_ACTIVE)),
        Span::raw(" scroll  "),
        Span::styled("Ctrl+C", Style::default().fg(COLOR_ACTIVE)),
        Span::raw(" quit"),
    ]);
    frame.render_widget(
        Paragraph::new(hints)
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Center),
        area,
    );
}
