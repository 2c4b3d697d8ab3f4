pub mod breakdown_panel;
pub mod header;
pub mod inputs_panel;
pub mod kpi_panel;
pub mod scenario_panel;
pub mod sheet_list;
pub mod status_bar;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::state::AppState;

/// Result of handling an event
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
    /// Request app exit
    Exit,
}

/// Trait for components that can handle input and render
pub trait Component {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}

/// Move a list cursor by one row, clamped to `len`
pub(crate) fn step_index(index: usize, len: usize, down: bool) -> usize {
    if down {
        (index + 1).min(len.saturating_sub(1))
    } else {
        index.saturating_sub(1)
    }
}
