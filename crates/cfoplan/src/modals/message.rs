use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::state::MessageModal;

use super::ModalResult;
use super::helpers::{HelpText, render_modal_frame};

const MODAL_WIDTH: u16 = 56;
/// Border, padding rows and the help line
const MODAL_CHROME_HEIGHT: u16 = 6;
/// Borders plus one column of padding each side
const TEXT_WIDTH: usize = MODAL_WIDTH as usize - 4;

/// Rows the message needs once wrapped to `width` columns. Explicit line
/// breaks (report paths, multi-part errors) each start a new row.
fn wrapped_rows(message: &str, width: usize) -> u16 {
    let width = width.max(1);
    let rows: usize = message
        .lines()
        .map(|line| line.chars().count().div_ceil(width).max(1))
        .sum();
    rows.max(1).min(u16::MAX as usize) as u16
}

pub fn render_message_modal(frame: &mut Frame, modal: &MessageModal) {
    // The marker takes two columns on the first row
    let rows = wrapped_rows(&format!("  {}", modal.message), TEXT_WIDTH);
    let height = (MODAL_CHROME_HEIGHT + rows).min(frame.area().height.saturating_sub(2));

    let (accent, marker) = if modal.is_error {
        (Color::Red, "✗ ")
    } else {
        (Color::Green, "✓ ")
    };

    let mf = render_modal_frame(
        frame,
        &modal.title,
        MODAL_WIDTH,
        height,
        accent,
        &[
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ],
    );

    let mut lines: Vec<Line> = Vec::new();
    for (i, text) in modal.message.lines().enumerate() {
        let body = Span::styled(text.to_string(), Style::default().fg(Color::White));
        if i == 0 {
            lines.push(Line::from(vec![Span::from(marker).fg(accent).bold(), body]));
        } else {
            lines.push(Line::from(body));
        }
    }

    let message = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    frame.render_widget(message, mf.chunks[1]);

    let help = HelpText::new()
        .key("[Enter]", Color::Green, "close")
        .build();
    frame.render_widget(help, mf.chunks[3]);
}

/// Any of Enter, Esc or Space dismisses; everything else is swallowed
pub fn handle_message_key(key: KeyEvent) -> ModalResult {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => ModalResult::Cancelled,
        _ => ModalResult::Continue,
    }
}
