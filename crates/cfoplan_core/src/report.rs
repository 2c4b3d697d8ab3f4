//! Plain-text report rendering.

use std::io;
use std::path::PathBuf;

use jiff::civil::Date;

use crate::format::format_currency;
use crate::model::{Metrics, Sheet};

pub const REPORT_MIME_TYPE: &str = "text/plain";

/// A rendered report ready to hand to a [`ReportSink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ReportArtifact {
    pub fn for_sheet(sheet: &Sheet, metrics: &Metrics, date: Date) -> Self {
        Self {
            file_name: report_file_name(&sheet.name),
            mime_type: REPORT_MIME_TYPE,
            bytes: render_report(sheet, metrics, date).into_bytes(),
        }
    }

    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// Destination for exported reports (a download folder, a browser, ...)
pub trait ReportSink {
    /// Deliver the artifact, returning where it ended up
    fn deliver(&mut self, artifact: &ReportArtifact) -> io::Result<PathBuf>;
}

/// `<name with whitespace replaced by _>-report.txt`
pub fn report_file_name(sheet_name: &str) -> String {
    let stem: String = sheet_name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{stem}-report.txt")
}

/// Render the fixed-structure report for a sheet and its metrics.
///
/// The baseline total is the flat baseline expense figure. It equals the
/// projected breakdown total with the marketing boost and hire cost backed
/// out, but does not depend on the breakdown categories.
pub fn render_report(sheet: &Sheet, metrics: &Metrics, date: Date) -> String {
    let base = &metrics.baseline;
    let projected = &metrics.projected;
    let scenario = &sheet.scenario;

    let lines = [
        format!("CFOPlan Report for: {}", sheet.name),
        "------------------------------------------".to_string(),
        format!("Date: {date}"),
        String::new(),
        "--- Base Case ---".to_string(),
        format!("Monthly Revenue: {}", format_currency(base.revenue)),
        format!("Total Monthly Expenses: {}", format_currency(base.expenses)),
        format!("Base Monthly Profit/Loss: {}", format_currency(base.profit)),
        format!("Financial Runway: {}", base.runway),
        String::new(),
        "--- Scenario Applied ---".to_string(),
        format!(
            "New Hires: {} (Cost: {})",
            scenario.new_hires,
            format_currency(metrics.hire_cost)
        ),
        format!(
            "Marketing Boost: {}",
            format_currency(metrics.marketing_boost)
        ),
        format!("Price Change: {}%", scenario.price_change),
        String::new(),
        "--- Projected Outcome ---".to_string(),
        format!(
            "Projected Monthly Revenue: {}",
            format_currency(projected.revenue)
        ),
        format!(
            "Projected Total Monthly Expenses: {}",
            format_currency(projected.expenses)
        ),
        format!(
            "Projected Monthly Profit/Loss: {}",
            format_currency(projected.profit)
        ),
        format!("Projected Financial Runway: {}", projected.runway),
    ];

    lines.join("\n")
}
