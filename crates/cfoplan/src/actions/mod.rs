// Handlers for dashboard actions.
//
// Key presses that need an answer first open a modal (`begin_*`); the
// confirmed modal is then dispatched to the matching `handle_*`.

mod report;
mod scenario;
mod sheet;

pub use report::*;
pub use scenario::*;
pub use sheet::*;

use crate::state::{AppState, ModalState};

/// Result of an action handler
#[derive(Debug)]
pub enum ActionResult {
    /// Action completed, set modal to this state (None closes the modal)
    Done(Option<ModalState>),
    /// Action failed with an error message
    Error(String),
}

impl ActionResult {
    pub fn close() -> Self {
        ActionResult::Done(None)
    }

    pub fn modal(state: ModalState) -> Self {
        ActionResult::Done(Some(state))
    }

    pub fn error(msg: impl Into<String>) -> Self {
        ActionResult::Error(msg.into())
    }
}

/// Install the modal (or error) an action produced
pub fn apply_action_result(state: &mut AppState, result: ActionResult) {
    match result {
        ActionResult::Done(modal) => {
            state.modal = modal.unwrap_or(ModalState::None);
        }
        ActionResult::Error(msg) => {
            state.set_error(msg);
            state.modal = ModalState::None;
        }
    }
}
