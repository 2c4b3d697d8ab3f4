use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::{AppState, DashboardPanel};
use crate::util::styles::HELP_COLOR;

pub struct StatusBar;

impl StatusBar {
    fn help_text(state: &AppState) -> &'static str {
        match state.focused_panel {
            DashboardPanel::Sheets => {
                "Tab: panel | j/k: switch sheet | n: new | d: delete | s: simulate | x: export | q: quit"
            }
            DashboardPanel::Inputs => {
                "Tab: panel | j/k: field | e: edit | s: simulate | x: export | q: quit"
            }
            DashboardPanel::Scenario => {
                "Tab: panel | j/k: lever | h/l: adjust | e: edit | s: simulate | x: export | q: quit"
            }
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.as_str()),
            ])
        } else if let Some(status) = &state.status_message {
            Line::from(vec![
                Span::styled(status.as_str(), Style::default().fg(Color::Green)),
                Span::styled(
                    format!("  |  {}", Self::help_text(state)),
                    Style::default().fg(HELP_COLOR),
                ),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
