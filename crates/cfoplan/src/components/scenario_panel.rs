use cfoplan_core::ScenarioField;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, EventResult, step_index};
use crate::actions::{apply_action_result, begin_edit_scenario, nudge_lever};
use crate::state::{AppState, DashboardPanel};
use crate::util::format::format_lever;
use crate::util::styles::{HELP_COLOR, focused_block_with_help, share_bar};

const SLIDER_WIDTH: usize = 20;

/// What-if levers, drawn as sliders
pub struct ScenarioPanel;

impl Component for ScenarioPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let lever = state.selected_lever();
        let result = match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                state.selected_lever_index =
                    step_index(state.selected_lever_index, ScenarioField::ALL.len(), true);
                return EventResult::Handled;
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.selected_lever_index =
                    step_index(state.selected_lever_index, ScenarioField::ALL.len(), false);
                return EventResult::Handled;
            }
            KeyCode::Char('l') | KeyCode::Right => nudge_lever(state, lever, 1),
            KeyCode::Char('h') | KeyCode::Left => nudge_lever(state, lever, -1),
            KeyCode::Char('e') | KeyCode::Enter => begin_edit_scenario(state, lever),
            _ => return EventResult::NotHandled,
        };
        apply_action_result(state, result);
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focused_panel == DashboardPanel::Scenario;
        let block = focused_block_with_help(
            " WHAT-IF SCENARIO ",
            focused,
            "[h/l] adjust [e]dit [s]imulate e[x]port",
        );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(sheet) = state.active_sheet() else {
            return;
        };

        let selected = state.selected_lever();
        let mut lines = Vec::new();
        for field in ScenarioField::ALL {
            let value = sheet.scenario.get(field);
            let (min, max) = field.range();
            let position = if max > min {
                (value - min) / (max - min)
            } else {
                0.0
            };

            let is_selected = focused && field == selected;
            let label_style = if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let prefix = if is_selected { "> " } else { "  " };

            lines.push(Line::from(vec![
                Span::styled(format!("{prefix}{}: ", field.label()), label_style),
                Span::styled(
                    format_lever(field, value),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(share_bar(position, SLIDER_WIDTH), Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!(" {} .. {}", format_lever(field, min), format_lever(field, max)),
                    Style::default().fg(HELP_COLOR),
                ),
            ]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
