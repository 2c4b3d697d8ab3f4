//! In-memory sheet store.
//!
//! Sheets live in an ordered `Vec` keyed by [`SheetId`], with a separate
//! active id. Every mutation is addressed by id, so a holder of a stale id
//! (an in-flight feed fetch, a UI selection) can never reach a deleted sheet:
//! unknown ids are a silent no-op.

use crate::error::SheetError;
use crate::model::{InputsPatch, LiveData, ScenarioPatch, Sheet, SheetId, UsageCounter};

#[derive(Debug, Clone, Default)]
pub struct SheetStore {
    sheets: Vec<Sheet>,
    active: Option<SheetId>,
    last_id: u64,
}

impl SheetStore {
    /// Create an empty store with no active sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id from the creation timestamp, bumped past the previous id so two
    /// sheets created in the same millisecond stay distinct
    fn next_id(&mut self) -> SheetId {
        let now_ms = u64::try_from(jiff::Timestamp::now().as_millisecond()).unwrap_or(0);
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;
        SheetId(id)
    }

    /// Create a sheet with default values, append it and make it active
    pub fn create_sheet(&mut self, name: impl Into<String>) -> &Sheet {
        let id = self.next_id();
        let sheet = Sheet::new(id, name);
        tracing::info!(sheet_id = %id, name = %sheet.name, "Created sheet");

        self.sheets.push(sheet);
        self.active = Some(id);
        &self.sheets[self.sheets.len() - 1]
    }

    /// Make `id` the active sheet. Returns false (and changes nothing) if the
    /// id is not present.
    pub fn select_sheet(&mut self, id: SheetId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.active != Some(id) {
            tracing::debug!(sheet_id = %id, "Selected sheet");
        }
        self.active = Some(id);
        true
    }

    /// Remove a sheet.
    ///
    /// Fails with [`SheetError::LastSheet`] if it is the only sheet, leaving
    /// the store untouched. An unknown id is a no-op. Removing the active
    /// sheet activates the first remaining one.
    pub fn delete_sheet(&mut self, id: SheetId) -> Result<Option<Sheet>, SheetError> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };
        if self.sheets.len() <= 1 {
            return Err(SheetError::LastSheet(id));
        }

        let removed = self.sheets.remove(index);
        if self.active == Some(id) {
            self.active = self.sheets.first().map(|s| s.id);
        }
        tracing::info!(sheet_id = %id, name = %removed.name, "Deleted sheet");
        Ok(Some(removed))
    }

    pub fn update_inputs(&mut self, id: SheetId, patch: InputsPatch) -> bool {
        self.with_sheet(id, |sheet| sheet.inputs.apply(patch))
    }

    pub fn update_scenario(&mut self, id: SheetId, patch: ScenarioPatch) -> bool {
        self.with_sheet(id, |sheet| sheet.scenario.apply(patch))
    }

    pub fn update_live_data(&mut self, id: SheetId, live_data: LiveData) -> bool {
        self.with_sheet(id, |sheet| sheet.live_data = live_data)
    }

    pub fn increment_usage(&mut self, id: SheetId, counter: UsageCounter) -> bool {
        self.with_sheet(id, |sheet| sheet.usage.increment(counter))
    }

    fn with_sheet(&mut self, id: SheetId, f: impl FnOnce(&mut Sheet)) -> bool {
        match self.sheets.iter_mut().find(|s| s.id == id) {
            Some(sheet) => {
                f(sheet);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: SheetId) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.id == id)
    }

    pub fn active_id(&self) -> Option<SheetId> {
        self.active
    }

    pub fn active(&self) -> Option<&Sheet> {
        self.active.and_then(|id| self.get(id))
    }

    /// All sheets in creation order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn position(&self, id: SheetId) -> Option<usize> {
        self.sheets.iter().position(|s| s.id == id)
    }

    pub fn contains(&self, id: SheetId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
