use std::path::PathBuf;

use cfoplan_core::ExportError;

use crate::state::{AppState, MessageModal, ModalState};

use super::ActionResult;

/// Render the active sheet's report and hand it to the exporter
pub fn export_active_report(state: &mut AppState) -> Result<PathBuf, ExportError> {
    let today = jiff::Zoned::now().date();
    state
        .manager
        .deliver_report(today, state.exporter.as_mut())
}

pub fn handle_export(state: &mut AppState) -> ActionResult {
    match export_active_report(state) {
        Ok(path) => {
            state.set_status(format!("Report saved to {}", path.display()));
            ActionResult::modal(ModalState::Message(MessageModal::info(
                "Report Exported",
                &format!("Saved to {}", path.display()),
            )))
        }
        Err(e) => {
            tracing::error!("Report export failed: {e}");
            ActionResult::error(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::{MemorySink, state};

    #[test]
    fn test_export_delivers_and_counts() {
        let mut state = state();
        let sink = MemorySink::default();
        let delivered = sink.delivered.clone();
        state.exporter = Box::new(sink);

        let path = export_active_report(&mut state).unwrap();

        assert_eq!(
            path,
            PathBuf::from("/reports/My_Startup_Budget_(INR)-report.txt")
        );
        let delivered = delivered.borrow();
        assert_eq!(delivered.len(), 1);
        assert!(
            delivered[0]
                .text()
                .starts_with("CFOPlan Report for: My Startup Budget (INR)")
        );
        assert_eq!(state.active_sheet().unwrap().usage().reports_exported(), 1);
    }

    #[test]
    fn test_failed_delivery_is_an_error() {
        let mut state = state();
        state.exporter = Box::new(MemorySink {
            fail: true,
            ..Default::default()
        });

        assert!(matches!(
            handle_export(&mut state),
            ActionResult::Error(msg) if msg.contains("My_Startup_Budget_(INR)-report.txt")
        ));
        assert_eq!(state.active_sheet().unwrap().usage().reports_exported(), 0);
    }
}
