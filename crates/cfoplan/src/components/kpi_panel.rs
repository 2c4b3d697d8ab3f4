use cfoplan_core::format::format_currency;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, runway_color, value_style};

/// Projected profit and runway, with their baseline values underneath
pub struct KpiPanel;

fn card<'a>(title: &'a str, headline: Span<'a>, base: String) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(headline.bold()),
        Line::from(Span::styled(base, Style::default().fg(HELP_COLOR))),
    ])
    .block(Block::default().borders(Borders::ALL).title(title))
}

impl Component for KpiPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(metrics) = state.active_metrics() else {
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let profit = card(
            " Projected Monthly Profit ",
            Span::styled(
                format_currency(metrics.projected.profit),
                value_style(metrics.projected.profit),
            ),
            format!("Base: {}", format_currency(metrics.baseline.profit)),
        );
        frame.render_widget(profit, chunks[0]);

        let runway = metrics.projected.runway;
        let runway_card = card(
            " Projected Financial Runway ",
            Span::styled(
                runway.to_string(),
                Style::default().fg(runway_color(runway.health())),
            ),
            format!("Base: {}", metrics.baseline.runway),
        );
        frame.render_widget(runway_card, chunks[1]);
    }
}
