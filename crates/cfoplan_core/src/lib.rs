//! Scenario financial engine for budget sheets
//!
//! This crate holds everything the dashboard needs that is not presentation:
//! - An in-memory store of budget sheets with exactly one active sheet
//! - Pure derivation of baseline and scenario-projected profit, burn and runway
//! - A live expense feed poller that re-resolves its target sheet on completion
//! - Plain-text report rendering
//! - A lifecycle manager that ties the above to the prompt and billing collaborators
//!
//! # Example
//!
//! ```ignore
//! use cfoplan_core::{LogBilling, SheetManager, ScenarioField};
//!
//! let mut manager = SheetManager::new(LogBilling, "My Startup Budget (INR)");
//! manager.set_scenario(ScenarioField::NewHires, "2");
//! let metrics = manager.simulate_scenario().unwrap();
//! println!("{}", metrics.projected.runway);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod coerce;
pub mod derive;
pub mod error;
pub mod feed;
pub mod format;
pub mod lifecycle;
pub mod poller;
pub mod report;
pub mod store;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use derive::{HIRE_MONTHLY_COST, derive};
pub use error::{ExportError, FeedError, SheetError};
pub use feed::{ExpenseFeed, ExpenseUpdate, SimulatedFeed};
pub use lifecycle::{Billing, DeleteOutcome, LogBilling, Prompter, SheetManager};
pub use model::{
    ExpenseCategory, ExpenseSlice, InputField, Inputs, InputsPatch, LiveData, Metrics,
    ProfitComparison, Projection, Runway, RunwayHealth, Scenario, ScenarioField, ScenarioPatch,
    Sheet, SheetId, Usage, UsageCounter,
};
pub use poller::{LiveFeedPoller, PollOutcome};
pub use report::{ReportArtifact, ReportSink, render_report};
pub use store::SheetStore;
