use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult};
use crate::actions::{apply_action_result, select_sheet_offset};
use crate::state::{AppState, DashboardPanel};
use crate::util::styles::focused_block_with_help;

/// Sheet list. Moving the cursor activates the sheet under it.
pub struct SheetList;

impl Component for SheetList {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let delta = match key.code {
            KeyCode::Char('j') | KeyCode::Down => 1,
            KeyCode::Char('k') | KeyCode::Up => -1,
            _ => return EventResult::NotHandled,
        };
        let result = select_sheet_offset(state, delta);
        apply_action_result(state, result);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focused_panel == DashboardPanel::Sheets;
        let block = focused_block_with_help(" SHEETS ", focused, "[n]ew [d]elete");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let active = state.manager.active_id();
        let visible = inner.height as usize;
        let selected = state.active_index().unwrap_or(0);
        let offset = selected.saturating_sub(visible.saturating_sub(1));

        let lines: Vec<Line> = state
            .manager
            .store()
            .sheets()
            .iter()
            .skip(offset)
            .take(visible)
            .map(|sheet| {
                if Some(sheet.id) == active {
                    Line::from(Span::styled(
                        format!("> {}", sheet.name),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(format!("  {}", sheet.name))
                }
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
