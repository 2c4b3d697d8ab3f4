//! Sheet lifecycle and user actions.
//!
//! [`SheetManager`] owns the store and routes user actions through it,
//! calling out to the prompt and billing collaborators where an action needs
//! them.

use std::path::PathBuf;

use jiff::civil::Date;

use crate::derive::derive;
use crate::error::{ExportError, SheetError};
use crate::model::{
    InputField, InputsPatch, Metrics, ScenarioField, ScenarioPatch, SheetId, UsageCounter,
};
use crate::report::{ReportArtifact, ReportSink};
use crate::store::SheetStore;

/// Synchronous user prompts
pub trait Prompter {
    /// Ask for a line of text. `None` means the user cancelled.
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str) -> bool;

    /// Show a message the user has to acknowledge
    fn alert(&mut self, message: &str);
}

/// Usage billing. Fire-and-forget: nothing is returned to the caller.
pub trait Billing {
    fn charge_for_scenario(&self);
    fn charge_for_report(&self);
}

/// Billing that only records charges in the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBilling;

impl Billing for LogBilling {
    fn charge_for_scenario(&self) {
        tracing::info!(target: "cfoplan_core::billing", "Charging user for 1 scenario simulation");
    }

    fn charge_for_report(&self) {
        tracing::info!(target: "cfoplan_core::billing", "Charging user for 1 report export");
    }
}

/// Result of a delete request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user did not confirm
    Declined,
    /// The store refused the deletion
    Rejected(SheetError),
    NotFound,
}

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this sheet?";
pub const NEW_SHEET_PROMPT: &str = "Enter new sheet name:";

pub struct SheetManager<B: Billing> {
    store: SheetStore,
    billing: B,
}

impl<B: Billing> SheetManager<B> {
    /// Start with a single sheet named `initial_name`
    pub fn new(billing: B, initial_name: &str) -> Self {
        let mut store = SheetStore::new();
        store.create_sheet(initial_name);
        Self { store, billing }
    }

    /// Wrap an existing store (which may be empty)
    pub fn with_store(billing: B, store: SheetStore) -> Self {
        Self { store, billing }
    }

    pub fn store(&self) -> &SheetStore {
        &self.store
    }

    /// Mutable store access for the live feed poller
    pub fn store_mut(&mut self) -> &mut SheetStore {
        &mut self.store
    }

    pub fn billing(&self) -> &B {
        &self.billing
    }

    pub fn active_id(&self) -> Option<SheetId> {
        self.store.active_id()
    }

    /// Metrics for the active sheet, derived fresh
    pub fn active_metrics(&self) -> Option<Metrics> {
        self.store.active().map(derive)
    }

    /// Default name offered when creating a sheet
    pub fn suggested_name(&self) -> String {
        format!("Financial Plan {}", self.store.len() + 1)
    }

    /// Prompt for a name and create a sheet. Cancel or blank input is a no-op.
    pub fn add_sheet(&mut self, prompter: &mut dyn Prompter) -> Option<SheetId> {
        let suggested = self.suggested_name();
        let name = prompter.prompt(NEW_SHEET_PROMPT, &suggested)?;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        Some(self.store.create_sheet(name).id)
    }

    pub fn select_sheet(&mut self, id: SheetId) -> bool {
        self.store.select_sheet(id)
    }

    /// Check whether `id` could be deleted without asking the user
    pub fn check_delete(&self, id: SheetId) -> Result<(), SheetError> {
        if self.store.contains(id) && self.store.len() <= 1 {
            return Err(SheetError::LastSheet(id));
        }
        Ok(())
    }

    /// Delete a sheet after confirmation.
    ///
    /// Deleting the last sheet is refused with an alert and never asks for
    /// confirmation.
    pub fn delete_sheet(&mut self, id: SheetId, prompter: &mut dyn Prompter) -> DeleteOutcome {
        if !self.store.contains(id) {
            return DeleteOutcome::NotFound;
        }
        if let Err(e) = self.check_delete(id) {
            tracing::info!(sheet_id = %id, "Refused to delete sheet: {e}");
            prompter.alert(&e.to_string());
            return DeleteOutcome::Rejected(e);
        }
        if !prompter.confirm(DELETE_CONFIRM_MESSAGE) {
            return DeleteOutcome::Declined;
        }

        match self.store.delete_sheet(id) {
            Ok(Some(_)) => DeleteOutcome::Deleted,
            Ok(None) => DeleteOutcome::NotFound,
            Err(e) => {
                prompter.alert(&e.to_string());
                DeleteOutcome::Rejected(e)
            }
        }
    }

    /// Set a baseline input on the active sheet from raw user entry
    pub fn set_input(&mut self, field: InputField, raw: &str) -> bool {
        let Some(id) = self.store.active_id() else {
            return false;
        };
        self.store.update_inputs(id, InputsPatch::from_raw(field, raw))
    }

    /// Set a scenario lever on the active sheet from raw user entry
    pub fn set_scenario(&mut self, field: ScenarioField, raw: &str) -> bool {
        let Some(id) = self.store.active_id() else {
            return false;
        };
        self.store.update_scenario(id, ScenarioPatch::from_raw(field, raw))
    }

    /// Move a scenario lever by whole slider steps on the active sheet
    pub fn nudge_scenario(&mut self, field: ScenarioField, steps: i32) -> bool {
        let Some(sheet) = self.store.active() else {
            return false;
        };
        let id = sheet.id;
        let value = field.nudge(sheet.scenario.get(field), steps);
        self.store.update_scenario(id, ScenarioPatch::field(field, value))
    }

    /// Record a scenario simulation on the active sheet and bill for it
    pub fn simulate_scenario(&mut self) -> Option<Metrics> {
        let id = self.store.active_id()?;
        self.billing.charge_for_scenario();
        self.store.increment_usage(id, UsageCounter::ScenariosTested);
        self.store.get(id).map(derive)
    }

    /// Export the active sheet's report, bill for it and count it
    pub fn export_report(&mut self, date: Date) -> Option<ReportArtifact> {
        let (id, artifact) = self.render_active_report(date)?;
        self.record_export(id);
        Some(artifact)
    }

    /// Render the active sheet's report and hand it to `sink`.
    ///
    /// The charge and the export counter only move once the sink has
    /// accepted the artifact.
    pub fn deliver_report(
        &mut self,
        date: Date,
        sink: &mut dyn ReportSink,
    ) -> Result<PathBuf, ExportError> {
        let (id, artifact) = self
            .render_active_report(date)
            .ok_or(ExportError::NoActiveSheet)?;

        let path = sink
            .deliver(&artifact)
            .map_err(|source| ExportError::Write {
                path: PathBuf::from(&artifact.file_name),
                source,
            })?;

        self.record_export(id);
        Ok(path)
    }

    fn render_active_report(&self, date: Date) -> Option<(SheetId, ReportArtifact)> {
        let id = self.store.active_id()?;
        let sheet = self.store.get(id)?;
        let metrics = derive(sheet);
        Some((id, ReportArtifact::for_sheet(sheet, &metrics, date)))
    }

    fn record_export(&mut self, id: SheetId) {
        self.billing.charge_for_report();
        self.store.increment_usage(id, UsageCounter::ReportsExported);
        tracing::info!(sheet_id = %id, "Exported report");
    }
}
