//! Integration tests for the cfoplan engine
//!
//! Tests are organized by topic:
//! - `derive` - Baseline/projected metrics and the runway sentinel
//! - `store` - Sheet store mutations and the active-sheet invariants
//! - `poller` - Live feed dispatch, resolution and stale-result handling
//! - `report` - Report text and artifact naming
//! - `lifecycle` - Prompted create/delete, simulate and export flows

mod derive;
mod lifecycle;

use crate::model::{Inputs, Scenario, Sheet, SheetId};

/// Sheet with the default example inputs and the given scenario
pub(crate) fn example_sheet(scenario: Scenario) -> Sheet {
    let mut sheet = Sheet::new(SheetId(1), "Example Budget");
    sheet.inputs = Inputs::default();
    sheet.scenario = scenario;
    sheet
}
