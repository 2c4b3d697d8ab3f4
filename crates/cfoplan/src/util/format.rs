//! Display helpers that sit on top of `cfoplan_core::format`

use jiff::Timestamp;
use jiff::tz::TimeZone;

use cfoplan_core::ScenarioField;
use cfoplan_core::format::{format_currency, format_grouped};

/// Local wall-clock time of the last feed update, or `N/A` before the first
pub fn format_last_updated(last_updated: Option<Timestamp>) -> String {
    format_last_updated_in(last_updated, &TimeZone::system())
}

pub fn format_last_updated_in(last_updated: Option<Timestamp>, tz: &TimeZone) -> String {
    match last_updated {
        Some(ts) => ts.to_zoned(tz.clone()).strftime("%H:%M:%S").to_string(),
        None => "N/A".to_string(),
    }
}

/// Current value of a scenario lever, in the lever's own unit
pub fn format_lever(field: ScenarioField, value: f64) -> String {
    match field {
        ScenarioField::MarketingBoost => format_currency(value),
        ScenarioField::NewHires => format!("{value:.0}"),
        ScenarioField::PriceChange => format!("{}%", format_grouped(value)),
    }
}
