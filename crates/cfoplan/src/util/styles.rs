//! Common styling utilities for dashboard panels

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};

use cfoplan_core::RunwayHealth;

pub const FOCUS_COLOR: Color = Color::Yellow;
pub const HELP_COLOR: Color = Color::DarkGray;
pub const HEADER_COLOR: Color = Color::Cyan;
pub const POSITIVE_COLOR: Color = Color::Green;
pub const NEGATIVE_COLOR: Color = Color::Red;
pub const WARNING_COLOR: Color = Color::Yellow;

/// Bordered block whose border turns yellow when focused
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default()
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title.to_string())
}

/// Like [`focused_block`], with key help on the bottom border while focused
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let mut block = focused_block(title, focused);
    if focused && !help_text.is_empty() {
        block = block.title_bottom(Line::from(format!(" {} ", help_text)).fg(HELP_COLOR));
    }
    block
}

/// Green for profit, red for loss
pub fn value_color(value: f64) -> Color {
    if value >= 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}

pub fn value_style(value: f64) -> Style {
    Style::default().fg(value_color(value))
}

pub fn runway_color(health: RunwayHealth) -> Color {
    match health {
        RunwayHealth::Critical => NEGATIVE_COLOR,
        RunwayHealth::Caution => WARNING_COLOR,
        RunwayHealth::Healthy => POSITIVE_COLOR,
    }
}

/// Horizontal bar of `width` cells filled to `share` (0.0..=1.0)
pub fn share_bar(share: f64, width: usize) -> String {
    let filled = ((share.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_color() {
        assert_eq!(value_color(55_000.0), POSITIVE_COLOR);
        assert_eq!(value_color(0.0), POSITIVE_COLOR);
        assert_eq!(value_color(-105_000.0), NEGATIVE_COLOR);
    }

    #[test]
    fn test_runway_color_by_health() {
        assert_eq!(runway_color(RunwayHealth::Critical), NEGATIVE_COLOR);
        assert_eq!(runway_color(RunwayHealth::Caution), WARNING_COLOR);
        assert_eq!(runway_color(RunwayHealth::Healthy), POSITIVE_COLOR);
    }

    #[test]
    fn test_share_bar() {
        assert_eq!(share_bar(0.0, 4), "░░░░");
        assert_eq!(share_bar(0.5, 4), "██░░");
        assert_eq!(share_bar(1.7, 4), "████");
        assert_eq!(share_bar(f64::NAN, 4).chars().count(), 4);
    }
}
