use cfoplan_core::format::{format_compact_currency, format_currency, format_share};
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{HELP_COLOR, share_bar, value_color};

const CATEGORY_COLORS: [Color; 4] = [Color::Blue, Color::Green, Color::LightRed, Color::Magenta];
const BAR_WIDTH: usize = 24;

/// Projected expense breakdown and the base vs projected profit comparison
pub struct BreakdownPanel;

impl BreakdownPanel {
    fn render_breakdown(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Expense Breakdown (Projected) ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(metrics) = state.active_metrics() else {
            return;
        };

        let shares = metrics.breakdown_shares();
        let mut lines: Vec<Line> = metrics
            .expense_breakdown
            .iter()
            .zip(shares)
            .zip(CATEGORY_COLORS)
            .map(|((slice, (_, share)), color)| {
                Line::from(vec![
                    Span::raw(format!("{:<13}", slice.category.label())),
                    Span::styled(share_bar(share, BAR_WIDTH), Style::default().fg(color)),
                    Span::raw(format!(" {:>4}  ", format_share(share))),
                    Span::raw(format_currency(slice.amount)),
                ])
            })
            .collect();

        lines.push(Line::from(Span::styled(
            format!("{:<13}Total {}", "", format_currency(metrics.breakdown_total())),
            Style::default().fg(HELP_COLOR),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_profit_comparison(frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Profitability (Base vs. Scenario) ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(metrics) = state.active_metrics() else {
            return;
        };

        let comparison = metrics.profit_comparison;
        let scale = comparison.base.abs().max(comparison.projected.abs());
        let bar = |value: f64| {
            let share = if scale > 0.0 { value.abs() / scale } else { 0.0 };
            Span::styled(share_bar(share, BAR_WIDTH), Style::default().fg(value_color(value)))
        };

        let lines = vec![
            Line::from(Span::styled(comparison.label, Style::default().fg(HELP_COLOR))),
            Line::from(vec![
                Span::raw(format!("{:<11}", "Base")),
                bar(comparison.base),
                Span::raw(format!(" {}", format_compact_currency(comparison.base))),
            ]),
            Line::from(vec![
                Span::raw(format!("{:<11}", "Projected")),
                bar(comparison.projected),
                Span::raw(format!(" {}", format_compact_currency(comparison.projected))),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for BreakdownPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(5)])
            .split(area);

        Self::render_breakdown(frame, chunks[0], state);
        Self::render_profit_comparison(frame, chunks[1], state);
    }
}
