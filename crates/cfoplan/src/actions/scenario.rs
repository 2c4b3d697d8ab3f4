use cfoplan_core::{InputField, ScenarioField};

use crate::state::{AppState, MessageModal, ModalAction, ModalState, TextInputModal};

use super::ActionResult;

/// Shown after a simulation; the projected panels already reflect the levers
pub const SIMULATED_MESSAGE: &str = "Scenario simulated! Check the 'Projected' values.";

pub fn begin_edit_input(state: &AppState, field: InputField) -> ActionResult {
    let Some(sheet) = state.active_sheet() else {
        return ActionResult::close();
    };
    let current = sheet.inputs.get(field);
    ActionResult::modal(ModalState::TextInput(TextInputModal::new(
        "Edit Input",
        &format!("{} (₹):", field.label()),
        &current.to_string(),
        ModalAction::EditInput(field),
    )))
}

pub fn handle_edit_input(state: &mut AppState, field: InputField, value: &str) -> ActionResult {
    if state.manager.set_input(field, value) {
        ActionResult::close()
    } else {
        ActionResult::error("No active sheet")
    }
}

pub fn begin_edit_scenario(state: &AppState, field: ScenarioField) -> ActionResult {
    let Some(sheet) = state.active_sheet() else {
        return ActionResult::close();
    };
    let (min, max) = field.range();
    ActionResult::modal(ModalState::TextInput(TextInputModal::new(
        "Edit Scenario",
        &format!("{} ({min} to {max}):", field.label()),
        &sheet.scenario.get(field).to_string(),
        ModalAction::EditScenario(field),
    )))
}

pub fn handle_edit_scenario(
    state: &mut AppState,
    field: ScenarioField,
    value: &str,
) -> ActionResult {
    if state.manager.set_scenario(field, value) {
        ActionResult::close()
    } else {
        ActionResult::error("No active sheet")
    }
}

/// Move the selected lever by whole slider steps
pub fn nudge_lever(state: &mut AppState, field: ScenarioField, steps: i32) -> ActionResult {
    state.manager.nudge_scenario(field, steps);
    ActionResult::close()
}

pub fn handle_simulate(state: &mut AppState) -> ActionResult {
    match state.manager.simulate_scenario() {
        Some(metrics) => {
            tracing::debug!(
                projected_profit = metrics.projected.profit,
                runway = %metrics.projected.runway,
                "Scenario simulated"
            );
            ActionResult::modal(ModalState::Message(MessageModal::info(
                "Simulate Scenario",
                SIMULATED_MESSAGE,
            )))
        }
        None => ActionResult::error("No active sheet"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::state;

    #[test]
    fn test_edit_input_prefills_raw_value() {
        let state = state();
        match begin_edit_input(&state, InputField::CashOnHand) {
            ActionResult::Done(Some(ModalState::TextInput(modal))) => {
                assert_eq!(modal.value, "2000000");
                assert_eq!(modal.action, ModalAction::EditInput(InputField::CashOnHand));
            }
            other => panic!("expected text input, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_input_becomes_zero() {
        let mut state = state();
        handle_edit_input(&mut state, InputField::OpEx, "abc");
        assert_eq!(state.active_sheet().unwrap().inputs.op_ex, 0.0);
    }

    #[test]
    fn test_edit_scenario_clamps() {
        let mut state = state();
        handle_edit_scenario(&mut state, ScenarioField::PriceChange, "80");
        handle_edit_scenario(&mut state, ScenarioField::NewHires, "2.9");

        let scenario = state.active_sheet().unwrap().scenario;
        assert_eq!(scenario.price_change, 50.0);
        assert_eq!(scenario.new_hires, 2);
    }

    #[test]
    fn test_nudge_lever_stays_in_range() {
        let mut state = state();
        nudge_lever(&mut state, ScenarioField::MarketingBoost, -1);
        assert_eq!(state.active_sheet().unwrap().scenario.marketing_boost, 0.0);
        nudge_lever(&mut state, ScenarioField::MarketingBoost, 2);
        assert_eq!(
            state.active_sheet().unwrap().scenario.marketing_boost,
            10_000.0
        );
    }

    #[test]
    fn test_simulate_counts_and_informs() {
        let mut state = state();
        match handle_simulate(&mut state) {
            ActionResult::Done(Some(ModalState::Message(modal))) => {
                assert!(!modal.is_error);
                assert_eq!(modal.message, SIMULATED_MESSAGE);
            }
            other => panic!("expected message, got {other:?}"),
        }
        handle_simulate(&mut state);
        assert_eq!(state.active_sheet().unwrap().usage().scenarios_tested(), 2);
    }
}
