use cfoplan_core::{
    InputField, LogBilling, Metrics, ReportSink, ScenarioField, Sheet, SheetManager,
};

use super::{DashboardPanel, ModalState};

pub struct AppState {
    pub manager: SheetManager<LogBilling>,
    pub focused_panel: DashboardPanel,
    /// Cursor in the inputs panel, an index into [`InputField::ALL`]
    pub selected_input_index: usize,
    /// Cursor in the scenario panel, an index into [`ScenarioField::ALL`]
    pub selected_lever_index: usize,
    pub modal: ModalState,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
    pub exporter: Box<dyn ReportSink>,
    pub exit: bool,
}

impl AppState {
    pub fn new(manager: SheetManager<LogBilling>, exporter: Box<dyn ReportSink>) -> Self {
        Self {
            manager,
            focused_panel: DashboardPanel::default(),
            selected_input_index: 0,
            selected_lever_index: 0,
            modal: ModalState::None,
            status_message: None,
            error_message: None,
            exporter,
            exit: false,
        }
    }

    pub fn active_sheet(&self) -> Option<&Sheet> {
        self.manager.store().active()
    }

    /// Metrics for the active sheet. Recomputed on every call.
    pub fn active_metrics(&self) -> Option<Metrics> {
        self.manager.active_metrics()
    }

    /// Position of the active sheet in the sheet list
    pub fn active_index(&self) -> Option<usize> {
        let id = self.manager.active_id()?;
        self.manager.store().position(id)
    }

    pub fn selected_input(&self) -> InputField {
        InputField::ALL[self.selected_input_index.min(InputField::ALL.len() - 1)]
    }

    pub fn selected_lever(&self) -> ScenarioField {
        ScenarioField::ALL[self.selected_lever_index.min(ScenarioField::ALL.len() - 1)]
    }

    pub fn has_modal(&self) -> bool {
        !matches!(self.modal, ModalState::None)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.error_message = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}
