//! Sheet lifecycle manager tests

use std::cell::Cell;
use std::io;
use std::path::PathBuf;

use jiff::civil::date;

use crate::error::{ExportError, SheetError};
use crate::lifecycle::{
    Billing, DELETE_CONFIRM_MESSAGE, DeleteOutcome, NEW_SHEET_PROMPT, Prompter, SheetManager,
};
use crate::model::{InputField, Runway, ScenarioField, SheetId};
use crate::report::{ReportArtifact, ReportSink};
use crate::store::SheetStore;

#[derive(Default)]
struct CountingBilling {
    scenarios: Cell<u32>,
    reports: Cell<u32>,
}

impl Billing for CountingBilling {
    fn charge_for_scenario(&self) {
        self.scenarios.set(self.scenarios.get() + 1);
    }

    fn charge_for_report(&self) {
        self.reports.set(self.reports.get() + 1);
    }
}

/// Prompter with canned answers that records what it was asked
#[derive(Default)]
struct ScriptedPrompter {
    answer: Option<String>,
    confirm: bool,
    prompts: Vec<(String, String)>,
    confirms: Vec<String>,
    alerts: Vec<String>,
}

impl ScriptedPrompter {
    fn answering(text: &str) -> Self {
        Self {
            answer: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn confirming(confirm: bool) -> Self {
        Self {
            confirm,
            ..Default::default()
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        self.prompts.push((message.to_string(), default.to_string()));
        self.answer.clone()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.confirm
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

fn manager() -> SheetManager<CountingBilling> {
    SheetManager::new(CountingBilling::default(), "My Startup Budget (INR)")
}

#[test]
fn test_starts_with_one_active_sheet() {
    let manager = manager();
    assert_eq!(manager.store().len(), 1);
    assert_eq!(
        manager.store().active().map(|s| s.name.as_str()),
        Some("My Startup Budget (INR)")
    );
}

#[test]
fn test_add_sheet_prompts_with_suggested_name() {
    let mut manager = manager();
    let mut prompter = ScriptedPrompter::answering("  Runway Plan  ");

    let id = manager.add_sheet(&mut prompter).unwrap();

    assert_eq!(
        prompter.prompts,
        vec![(NEW_SHEET_PROMPT.to_string(), "Financial Plan 2".to_string())]
    );
    assert_eq!(manager.active_id(), Some(id));
    assert_eq!(manager.store().get(id).unwrap().name, "Runway Plan");
}

#[test]
fn test_add_sheet_cancel_or_blank_is_noop() {
    let mut manager = manager();

    assert_eq!(manager.add_sheet(&mut ScriptedPrompter::default()), None);
    assert_eq!(manager.add_sheet(&mut ScriptedPrompter::answering("   ")), None);
    assert_eq!(manager.store().len(), 1);
}

#[test]
fn test_delete_last_sheet_alerts_without_confirming() {
    let mut manager = manager();
    let id = manager.active_id().unwrap();
    let mut prompter = ScriptedPrompter::confirming(true);

    let outcome = manager.delete_sheet(id, &mut prompter);

    assert_eq!(outcome, DeleteOutcome::Rejected(SheetError::LastSheet(id)));
    assert!(prompter.confirms.is_empty());
    assert_eq!(prompter.alerts, vec!["You cannot delete the last sheet.".to_string()]);
    assert_eq!(manager.store().len(), 1);
    assert_eq!(manager.check_delete(id), Err(SheetError::LastSheet(id)));
}

#[test]
fn test_delete_requires_confirmation() {
    let mut manager = manager();
    let first = manager.active_id().unwrap();
    manager.add_sheet(&mut ScriptedPrompter::answering("Second"));

    let mut declining = ScriptedPrompter::confirming(false);
    assert_eq!(manager.delete_sheet(first, &mut declining), DeleteOutcome::Declined);
    assert_eq!(declining.confirms, vec![DELETE_CONFIRM_MESSAGE.to_string()]);
    assert_eq!(manager.store().len(), 2);

    let mut accepting = ScriptedPrompter::confirming(true);
    assert_eq!(manager.delete_sheet(first, &mut accepting), DeleteOutcome::Deleted);
    assert_eq!(manager.store().len(), 1);
    assert!(accepting.alerts.is_empty());
}

#[test]
fn test_delete_unknown_sheet_asks_nothing() {
    let mut manager = manager();
    let mut prompter = ScriptedPrompter::confirming(true);

    assert_eq!(
        manager.delete_sheet(SheetId(3), &mut prompter),
        DeleteOutcome::NotFound
    );
    assert!(prompter.confirms.is_empty() && prompter.alerts.is_empty());
}

#[test]
fn test_edits_apply_to_active_sheet_only() {
    let mut manager = manager();
    let first = manager.active_id().unwrap();
    let second = manager
        .add_sheet(&mut ScriptedPrompter::answering("Second"))
        .unwrap();

    assert!(manager.set_input(InputField::MonthlyRevenue, "420000"));
    assert!(manager.set_scenario(ScenarioField::PriceChange, "12.5"));

    let store = manager.store();
    assert_eq!(store.get(second).unwrap().inputs.monthly_revenue, 420_000.0);
    assert_eq!(store.get(second).unwrap().scenario.price_change, 12.5);
    assert_eq!(store.get(first).unwrap().inputs.monthly_revenue, 500_000.0);
}

#[test]
fn test_nudge_scenario_moves_by_slider_steps() {
    let mut manager = manager();

    manager.nudge_scenario(ScenarioField::MarketingBoost, 3);
    manager.nudge_scenario(ScenarioField::NewHires, 12);
    manager.nudge_scenario(ScenarioField::PriceChange, -2);

    let scenario = manager.store().active().unwrap().scenario;
    assert_eq!(scenario.marketing_boost, 15_000.0);
    assert_eq!(scenario.new_hires, 10);
    assert_eq!(scenario.price_change, -10.0);
}

#[test]
fn test_simulate_bills_once_and_counts() {
    let mut manager = manager();
    manager.set_scenario(ScenarioField::NewHires, "2");
    manager.set_scenario(ScenarioField::MarketingBoost, "10000");
    manager.set_scenario(ScenarioField::PriceChange, "-10");

    let metrics = manager.simulate_scenario().unwrap();

    assert_eq!(metrics.projected.runway, Runway::Months(19));
    assert_eq!(manager.billing().scenarios.get(), 1);
    assert_eq!(manager.billing().reports.get(), 0);
    assert_eq!(
        manager.store().active().unwrap().usage().scenarios_tested(),
        1
    );
}

#[test]
fn test_export_bills_once_counts_and_renders() {
    let mut manager = manager();

    let artifact = manager.export_report(date(2026, 10, 19)).unwrap();

    assert_eq!(manager.billing().reports.get(), 1);
    assert_eq!(manager.billing().scenarios.get(), 0);
    assert_eq!(
        manager.store().active().unwrap().usage().reports_exported(),
        1
    );
    assert_eq!(artifact.file_name, "My_Startup_Budget_(INR)-report.txt");
    assert!(artifact.text().contains("Date: 2026-10-19"));
}

#[test]
fn test_typed_levers_are_held_to_slider_range() {
    let mut manager = manager();

    assert!(manager.set_scenario(ScenarioField::NewHires, "50"));
    assert!(manager.set_scenario(ScenarioField::MarketingBoost, "900000"));
    let scenario = manager.store().active().unwrap().scenario;
    assert_eq!(scenario.new_hires, 10);
    assert_eq!(scenario.marketing_boost, 200_000.0);

    // Increasing from the top of the range leaves it there
    assert!(manager.nudge_scenario(ScenarioField::NewHires, 1));
    assert_eq!(manager.store().active().unwrap().scenario.new_hires, 10);
}

/// Sink that either accepts everything into memory or refuses everything
#[derive(Default)]
struct VecSink {
    refuse: bool,
    delivered: Vec<ReportArtifact>,
}

impl ReportSink for VecSink {
    fn deliver(&mut self, artifact: &ReportArtifact) -> io::Result<PathBuf> {
        if self.refuse {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.delivered.push(artifact.clone());
        Ok(PathBuf::from("out").join(&artifact.file_name))
    }
}

#[test]
fn test_deliver_report_bills_after_sink_accepts() {
    let mut manager = manager();
    let mut sink = VecSink::default();

    let path = manager
        .deliver_report(date(2026, 10, 19), &mut sink)
        .unwrap();

    assert_eq!(path, PathBuf::from("out/My_Startup_Budget_(INR)-report.txt"));
    assert_eq!(sink.delivered.len(), 1);
    assert_eq!(manager.billing().reports.get(), 1);
    assert_eq!(
        manager.store().active().unwrap().usage().reports_exported(),
        1
    );
}

#[test]
fn test_deliver_report_refused_is_not_billed() {
    let mut manager = manager();
    let mut sink = VecSink {
        refuse: true,
        ..Default::default()
    };

    let err = manager
        .deliver_report(date(2026, 10, 19), &mut sink)
        .unwrap_err();

    assert!(matches!(
        err,
        ExportError::Write { ref path, .. } if path == &PathBuf::from("My_Startup_Budget_(INR)-report.txt")
    ));
    assert_eq!(manager.billing().reports.get(), 0);
    assert_eq!(
        manager.store().active().unwrap().usage().reports_exported(),
        0
    );
}

#[test]
fn test_actions_without_active_sheet_do_nothing() {
    let mut manager = SheetManager::with_store(CountingBilling::default(), SheetStore::new());

    assert!(manager.simulate_scenario().is_none());
    assert!(manager.export_report(date(2026, 1, 1)).is_none());
    assert!(matches!(
        manager.deliver_report(date(2026, 1, 1), &mut VecSink::default()),
        Err(ExportError::NoActiveSheet)
    ));
    assert!(!manager.set_input(InputField::OpEx, "1"));
    assert!(!manager.nudge_scenario(ScenarioField::NewHires, 1));
    assert!(manager.active_metrics().is_none());
    assert_eq!(manager.billing().scenarios.get(), 0);
    assert_eq!(manager.billing().reports.get(), 0);
}

#[test]
fn test_add_sheet_into_empty_store_activates_it() {
    let mut manager = SheetManager::with_store(CountingBilling::default(), SheetStore::new());
    let id = manager
        .add_sheet(&mut ScriptedPrompter::answering("First"))
        .unwrap();

    assert_eq!(manager.active_id(), Some(id));
    assert_eq!(manager.suggested_name(), "Financial Plan 2");
}
