//! Rendering pieces shared by the modals

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::centered_rect;

/// A line of text with a block cursor at char position `cursor_pos`
pub fn render_cursor_line(display_value: &str, cursor_pos: usize, prefix: &str) -> Line<'static> {
    let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
    let mut spans = Vec::new();

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    let chars: Vec<char> = display_value.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if i == cursor_pos {
            spans.push(Span::styled(c.to_string(), cursor_style));
        } else {
            spans.push(Span::raw(c.to_string()));
        }
    }

    if cursor_pos >= chars.len() {
        spans.push(Span::styled(" ", cursor_style));
    }

    Line::from(spans)
}

/// Visible window of a text input that is wider than its box
pub struct ScrolledView {
    pub display_value: String,
    /// Cursor position within `display_value`, in chars
    pub cursor_pos: usize,
}

/// Window `value` to `max_width` chars, keeping the cursor near the middle
pub fn calculate_scroll(value: &str, cursor_pos: usize, max_width: usize) -> ScrolledView {
    let input_width = max_width.saturating_sub(2);
    let len = value.chars().count();

    if len <= input_width {
        return ScrolledView {
            display_value: value.to_string(),
            cursor_pos,
        };
    }

    let start = cursor_pos.saturating_sub(input_width / 2);
    let end = (start + input_width).min(len);
    let start = end.saturating_sub(input_width);

    ScrolledView {
        display_value: value.chars().skip(start).take(end - start).collect(),
        cursor_pos: cursor_pos - start,
    }
}

pub struct ModalFrame {
    pub chunks: Rc<[Rect]>,
}

/// Clear a centered area, draw a titled border, and lay out its rows
pub fn render_modal_frame(
    frame: &mut Frame,
    title: &str,
    width: u16,
    height: u16,
    border_color: Color,
    constraints: &[Constraint],
) -> ModalFrame {
    let modal_area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", title));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    ModalFrame { chunks }
}

/// Key hints such as `[Enter] Confirm  [Esc] Cancel`
#[derive(Default)]
pub struct HelpText {
    items: Vec<(String, Color, String)>,
}

impl HelpText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: &str, color: Color, desc: &str) -> Self {
        self.items.push((key.to_string(), color, desc.to_string()));
        self
    }

    pub fn build(self) -> Paragraph<'static> {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, color, desc)) in self.items.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(key, Style::default().fg(color)));
            spans.push(Span::raw(format!(" {}", desc)));
        }
        Paragraph::new(Line::from(spans))
    }
}
