use cfoplan_core::SheetId;
use cfoplan_core::lifecycle::{DELETE_CONFIRM_MESSAGE, DeleteOutcome, NEW_SHEET_PROMPT};

use crate::prompter::ModalAnswer;
use crate::state::{AppState, ConfirmModal, MessageModal, ModalAction, ModalState, TextInputModal};

use super::ActionResult;

/// Open the name prompt for a new sheet
pub fn begin_add_sheet(state: &AppState) -> ActionResult {
    ActionResult::modal(ModalState::TextInput(TextInputModal::new(
        "New Sheet",
        NEW_SHEET_PROMPT,
        &state.manager.suggested_name(),
        ModalAction::AddSheet,
    )))
}

pub fn handle_add_sheet(state: &mut AppState, value: &str) -> ActionResult {
    let mut answer = ModalAnswer::text(value);
    if let Some(id) = state.manager.add_sheet(&mut answer) {
        let name = state
            .manager
            .store()
            .get(id)
            .map(|s| s.name.clone())
            .unwrap_or_default();
        state.set_status(format!("Created sheet '{name}'"));
    }
    ActionResult::close()
}

/// Ask before deleting the active sheet, or explain why it cannot be deleted
pub fn begin_delete_sheet(state: &AppState) -> ActionResult {
    let Some(id) = state.manager.active_id() else {
        return ActionResult::close();
    };
    match state.manager.check_delete(id) {
        Ok(()) => ActionResult::modal(ModalState::Confirm(ConfirmModal::new(
            "Delete Sheet",
            DELETE_CONFIRM_MESSAGE,
            ModalAction::DeleteSheet(id),
        ))),
        Err(e) => ActionResult::modal(ModalState::Message(MessageModal::error(
            "Cannot Delete",
            &e.to_string(),
        ))),
    }
}

pub fn handle_delete_sheet(state: &mut AppState, id: SheetId) -> ActionResult {
    let mut answer = ModalAnswer::confirmed();
    match state.manager.delete_sheet(id, &mut answer) {
        DeleteOutcome::Deleted => {
            state.set_status("Sheet deleted");
            ActionResult::close()
        }
        DeleteOutcome::Rejected(e) => {
            let message = answer
                .take_alerts()
                .pop()
                .unwrap_or_else(|| e.to_string());
            ActionResult::modal(ModalState::Message(MessageModal::error(
                "Cannot Delete",
                &message,
            )))
        }
        DeleteOutcome::Declined | DeleteOutcome::NotFound => ActionResult::close(),
    }
}

/// Activate the sheet `delta` rows away from the active one, clamped to the list
pub fn select_sheet_offset(state: &mut AppState, delta: isize) -> ActionResult {
    let store = state.manager.store();
    let Some(current) = state.active_index() else {
        return ActionResult::close();
    };
    let target = current
        .saturating_add_signed(delta)
        .min(store.len().saturating_sub(1));
    let Some(id) = store.sheets().get(target).map(|s| s.id) else {
        return ActionResult::close();
    };
    if target != current {
        state.manager.select_sheet(id);
    }
    ActionResult::close()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::state;

    fn confirmed_input(result: ActionResult) -> TextInputModal {
        match result {
            ActionResult::Done(Some(ModalState::TextInput(modal))) => modal,
            other => panic!("expected text input modal, got {other:?}"),
        }
    }

    #[test]
    fn test_add_sheet_prompt_suggests_next_name() {
        let state = state();
        let modal = confirmed_input(begin_add_sheet(&state));
        assert_eq!(modal.prompt, NEW_SHEET_PROMPT);
        assert_eq!(modal.value, "Financial Plan 2");
        assert_eq!(modal.action, ModalAction::AddSheet);
    }

    #[test]
    fn test_add_sheet_activates_new_sheet() {
        let mut state = state();
        handle_add_sheet(&mut state, "Runway Plan");

        assert_eq!(state.manager.store().len(), 2);
        assert_eq!(state.active_sheet().unwrap().name, "Runway Plan");
        assert_eq!(state.active_index(), Some(1));
        assert!(state.status_message.is_some());
    }

    #[test]
    fn test_blank_name_adds_nothing() {
        let mut state = state();
        handle_add_sheet(&mut state, "   ");
        assert_eq!(state.manager.store().len(), 1);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_delete_last_sheet_shows_error_without_confirm() {
        let state = state();
        match begin_delete_sheet(&state) {
            ActionResult::Done(Some(ModalState::Message(modal))) => {
                assert!(modal.is_error);
                assert_eq!(modal.message, "You cannot delete the last sheet.");
            }
            other => panic!("expected error message, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_asks_then_deletes() {
        let mut state = state();
        handle_add_sheet(&mut state, "Second");
        let second = state.manager.active_id().unwrap();

        let action = match begin_delete_sheet(&state) {
            ActionResult::Done(Some(ModalState::Confirm(modal))) => {
                assert_eq!(modal.message, DELETE_CONFIRM_MESSAGE);
                modal.action
            }
            other => panic!("expected confirm modal, got {other:?}"),
        };
        assert_eq!(action, ModalAction::DeleteSheet(second));

        handle_delete_sheet(&mut state, second);
        assert_eq!(state.manager.store().len(), 1);
        assert_eq!(state.active_sheet().unwrap().name, "My Startup Budget (INR)");
    }

    #[test]
    fn test_select_offset_clamps() {
        let mut state = state();
        handle_add_sheet(&mut state, "B");
        handle_add_sheet(&mut state, "C");
        assert_eq!(state.active_index(), Some(2));

        select_sheet_offset(&mut state, 1);
        assert_eq!(state.active_index(), Some(2));
        select_sheet_offset(&mut state, -1);
        assert_eq!(state.active_sheet().unwrap().name, "B");
        select_sheet_offset(&mut state, -5);
        assert_eq!(state.active_index(), Some(0));
    }
}
