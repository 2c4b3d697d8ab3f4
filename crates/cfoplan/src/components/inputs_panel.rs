use cfoplan_core::InputField;
use cfoplan_core::format::format_currency;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult, step_index};
use crate::actions::{apply_action_result, begin_edit_input};
use crate::state::{AppState, DashboardPanel};
use crate::util::format::format_last_updated;
use crate::util::styles::{HELP_COLOR, focused_block_with_help};

/// Baseline inputs plus the live miscellaneous expense
pub struct InputsPanel;

impl Component for InputsPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.selected_input_index =
                    step_index(state.selected_input_index, InputField::ALL.len(), true);
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.selected_input_index =
                    step_index(state.selected_input_index, InputField::ALL.len(), false);
                EventResult::Handled
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                let result = begin_edit_input(state, state.selected_input());
                apply_action_result(state, result);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focused_panel == DashboardPanel::Inputs;
        let block = focused_block_with_help(" BASE FINANCIAL INPUTS ", focused, "[e]dit");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(sheet) = state.active_sheet() else {
            return;
        };

        let selected = state.selected_input();
        let mut lines: Vec<Line> = InputField::ALL
            .iter()
            .map(|&field| {
                let is_selected = focused && field == selected;
                let prefix = if is_selected { "> " } else { "  " };
                let label_style = if is_selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(format!("{prefix}{:<22}", field.label()), label_style),
                    Span::raw(format_currency(sheet.inputs.get(field))),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<22}", "Live Misc. Expense"), Style::default().fg(Color::Cyan)),
            Span::raw(format_currency(sheet.live_data.latest_misc_expense)),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "  Last updated: {}",
                format_last_updated(sheet.live_data.last_updated)
            ),
            Style::default().fg(HELP_COLOR),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
