//! Document builder: the markup layer between views and ratatui.
//!
//! Views describe their output top to bottom (headings, text, button rows,
//! inputs, list rows). The document turns that into styled [`Line`]s and
//! remembers where every control landed so mouse clicks can be mapped back
//! to a [`ControlId`].

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::theme::{
    button_style, heading_style, input_style, title_style, COLOR_BORDER, COLOR_DIM,
    COLOR_FOCUS,
};
use crate::view::ControlId;

/// Minimum inner width of a text input, in columns.
pub const INPUT_MIN_WIDTH: usize = 24;

const CURSOR: char = '\u{2588}';
const BULLET: &str = "\u{2022}";

/// Where a control was placed, relative to the document origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSpan {
    pub id: ControlId,
    pub row: u16,
    pub col: u16,
    pub width: u16,
}

/// Rendered output of one view for one frame.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line<'static>>,
    controls: Vec<ControlSpan>,
    focused: Option<ControlId>,
}

fn width_of(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

impl Document {
    /// Start an empty document; `focused` controls get highlighted.
    pub fn new(focused: Option<ControlId>) -> Self {
        Self {
            lines: Vec::new(),
            controls: Vec::new(),
            focused,
        }
    }

    pub fn focused(&self) -> Option<ControlId> {
        self.focused
    }

    fn next_row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn line(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Page title.
    pub fn title(&mut self, text: impl Into<String>) {
        self.line(Line::from(Span::styled(text.into(), title_style())));
    }

    /// Section heading, preceded by a blank line unless it opens the page.
    pub fn heading(&mut self, text: impl Into<String>) {
        if !self.lines.is_empty() {
            self.blank();
        }
        self.line(Line::from(Span::styled(text.into(), heading_style())));
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.line(Line::from(text.into()));
    }

    pub fn styled(&mut self, text: impl Into<String>, style: Style) {
        self.line(Line::from(Span::styled(text.into(), style)));
    }

    /// One row of buttons, left to right.
    pub fn buttons(&mut self, buttons: &[(ControlId, &str)]) {
        let row = self.next_row();
        let mut spans = Vec::with_capacity(buttons.len() * 2);
        let mut col: u16 = 0;

        for (i, (id, label)) in buttons.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
                col = col.saturating_add(1);
            }
            let text = format!("[ {} ]", label);
            let width = width_of(&text);
            let focused = self.focused == Some(*id);
            spans.push(Span::styled(text, button_style(focused)));
            self.controls.push(ControlSpan {
                id: *id,
                row,
                col,
                width,
            });
            col = col.saturating_add(width);
        }

        self.line(Line::from(spans));
    }

    /// A single-line text input.
    pub fn input(&mut self, id: ControlId, value: &str, placeholder: Option<&str>) {
        let row = self.next_row();
        let focused = self.focused == Some(id);

        let (body, body_style) = match placeholder {
            Some(hint) if value.is_empty() => (hint.to_string(), input_style(focused).fg(COLOR_DIM)),
            _ => (value.to_string(), input_style(focused)),
        };
        let mut inner = String::with_capacity(body.len() + 4);
        if focused && value.is_empty() {
            inner.push(CURSOR);
        }
        inner.push_str(&body);
        if focused && !value.is_empty() {
            inner.push(CURSOR);
        }
        let pad = INPUT_MIN_WIDTH.saturating_sub(inner.width());
        inner.push_str(&" ".repeat(pad));

        let field = format!(" {} ", inner);
        let bracket_style = if focused {
            Style::default().fg(COLOR_FOCUS).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_BORDER)
        };
        let width = width_of(&field).saturating_add(2);

        self.controls.push(ControlSpan {
            id,
            row,
            col: 0,
            width,
        });
        self.line(Line::from(vec![
            Span::styled("[", bracket_style),
            Span::styled(field, body_style),
            Span::styled("]", bracket_style),
        ]));
    }

    /// Bulleted list, one row per item in the given order.
    pub fn list<'a, I>(&mut self, items: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for item in items {
            self.line(Line::from(format!("  {} {}", BULLET, item)));
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn controls(&self) -> &[ControlSpan] {
        &self.controls
    }

    pub fn row_of(&self, id: ControlId) -> Option<u16> {
        self.controls.iter().find(|c| c.id == id).map(|c| c.row)
    }

    /// Unstyled text of every line.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.plain_lines().iter().any(|l| l.contains(needle))
    }

    /// Screen rectangles of every visible control when the document is
    /// drawn into `area` scrolled down by `scroll` rows.
    pub fn hit_rects(&self, area: Rect, scroll: u16) -> Vec<(ControlId, Rect)> {
        self.controls
            .iter()
            .filter(|c| c.row >= scroll && c.row - scroll < area.height && c.col < area.width)
            .map(|c| {
                let rect = Rect {
                    x: area.x + c.col,
                    y: area.y + (c.row - scroll),
                    width: c.width.min(area.width - c.col),
                    height: 1,
                };
                (c.id, rect)
            })
            .collect()
    }
}
