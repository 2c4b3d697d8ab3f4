use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::HEADER_COLOR;

/// Active sheet name and its usage counters
pub struct Header;

impl Component for Header {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let line = match state.active_sheet() {
            Some(sheet) => {
                let usage = sheet.usage();
                Line::from(vec![
                    Span::styled(
                        sheet.name.clone(),
                        Style::default()
                            .fg(HEADER_COLOR)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("   Scenarios Tested: "),
                    Span::styled(
                        usage.scenarios_tested().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("   Reports Exported: "),
                    Span::styled(
                        usage.reports_exported().to_string(),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                ])
            }
            None => Line::from("Create or select a sheet to begin."),
        };

        let paragraph =
            Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM).title(" CFOPlan "));
        frame.render_widget(paragraph, area);
    }
}
