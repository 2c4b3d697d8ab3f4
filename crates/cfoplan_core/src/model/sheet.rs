//! Budget sheet records
//!
//! A sheet bundles baseline inputs, scenario levers, the latest live feed
//! value and usage counters. Sheets are only mutated through
//! [`SheetStore`](crate::store::SheetStore).

use serde::{Deserialize, Serialize};

use super::ids::SheetId;
use crate::coerce::{coerce_amount, coerce_count, coerce_percent};

/// Baseline monthly financial inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    pub monthly_revenue: f64,
    pub op_ex: f64,
    pub marketing_ex: f64,
    pub salaries_ex: f64,
    pub cash_on_hand: f64,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            monthly_revenue: 500_000.0,
            op_ex: 120_000.0,
            marketing_ex: 75_000.0,
            salaries_ex: 250_000.0,
            cash_on_hand: 2_000_000.0,
        }
    }
}

impl Inputs {
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::MonthlyRevenue => self.monthly_revenue,
            InputField::OpEx => self.op_ex,
            InputField::MarketingEx => self.marketing_ex,
            InputField::SalariesEx => self.salaries_ex,
            InputField::CashOnHand => self.cash_on_hand,
        }
    }

    /// Merge a partial update, keeping fields the patch leaves unset.
    /// Amounts are clamped to >= 0 on the way in.
    pub fn apply(&mut self, patch: InputsPatch) {
        if let Some(v) = patch.monthly_revenue {
            self.monthly_revenue = coerce_amount(v);
        }
        if let Some(v) = patch.op_ex {
            self.op_ex = coerce_amount(v);
        }
        if let Some(v) = patch.marketing_ex {
            self.marketing_ex = coerce_amount(v);
        }
        if let Some(v) = patch.salaries_ex {
            self.salaries_ex = coerce_amount(v);
        }
        if let Some(v) = patch.cash_on_hand {
            self.cash_on_hand = coerce_amount(v);
        }
    }
}

/// Editable baseline input fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    MonthlyRevenue,
    OpEx,
    MarketingEx,
    SalariesEx,
    CashOnHand,
}

impl InputField {
    pub const ALL: [InputField; 5] = [
        InputField::MonthlyRevenue,
        InputField::OpEx,
        InputField::MarketingEx,
        InputField::SalariesEx,
        InputField::CashOnHand,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            InputField::MonthlyRevenue => "Monthly Revenue",
            InputField::OpEx => "Operations Expense",
            InputField::MarketingEx => "Marketing Expense",
            InputField::SalariesEx => "Salaries Expense",
            InputField::CashOnHand => "Total Cash on Hand",
        }
    }
}

/// Partial update to [`Inputs`]. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputsPatch {
    pub monthly_revenue: Option<f64>,
    pub op_ex: Option<f64>,
    pub marketing_ex: Option<f64>,
    pub salaries_ex: Option<f64>,
    pub cash_on_hand: Option<f64>,
}

impl InputsPatch {
    /// Patch a single field with an already-numeric value (clamped to >= 0)
    pub fn field(field: InputField, value: f64) -> Self {
        let value = coerce_amount(value);
        let mut patch = Self::default();
        match field {
            InputField::MonthlyRevenue => patch.monthly_revenue = Some(value),
            InputField::OpEx => patch.op_ex = Some(value),
            InputField::MarketingEx => patch.marketing_ex = Some(value),
            InputField::SalariesEx => patch.salaries_ex = Some(value),
            InputField::CashOnHand => patch.cash_on_hand = Some(value),
        }
        patch
    }

    /// Patch a single field from raw user entry; unparseable text becomes 0
    pub fn from_raw(field: InputField, raw: &str) -> Self {
        Self::field(field, crate::coerce::parse_number(raw))
    }
}

/// "What-if" levers applied on top of the baseline
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub new_hires: u32,
    pub marketing_boost: f64,
    /// Percentage change applied to revenue, within -50..=50
    pub price_change: f64,
}

impl Scenario {
    pub fn get(&self, field: ScenarioField) -> f64 {
        match field {
            ScenarioField::NewHires => f64::from(self.new_hires),
            ScenarioField::MarketingBoost => self.marketing_boost,
            ScenarioField::PriceChange => self.price_change,
        }
    }

    /// Merge a partial update. Every lever is clamped to its slider range.
    pub fn apply(&mut self, patch: ScenarioPatch) {
        if let Some(v) = patch.new_hires {
            self.new_hires = coerce_count(ScenarioField::NewHires.coerce(f64::from(v)));
        }
        if let Some(v) = patch.marketing_boost {
            self.marketing_boost = ScenarioField::MarketingBoost.coerce(v);
        }
        if let Some(v) = patch.price_change {
            self.price_change = ScenarioField::PriceChange.coerce(v);
        }
    }
}

/// Scenario levers, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioField {
    MarketingBoost,
    NewHires,
    PriceChange,
}

impl ScenarioField {
    pub const ALL: [ScenarioField; 3] = [
        ScenarioField::MarketingBoost,
        ScenarioField::NewHires,
        ScenarioField::PriceChange,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScenarioField::MarketingBoost => "Add. Marketing Spend",
            ScenarioField::NewHires => "New Hires",
            ScenarioField::PriceChange => "Product Price Change",
        }
    }

    /// Slider bounds (min, max)
    pub fn range(&self) -> (f64, f64) {
        match self {
            ScenarioField::MarketingBoost => (0.0, 200_000.0),
            ScenarioField::NewHires => (0.0, 10.0),
            ScenarioField::PriceChange => (-50.0, 50.0),
        }
    }

    /// Bring `value` into this lever's domain: clamped to the slider range,
    /// whole for head counts, 0 when not finite
    pub fn coerce(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return 0.0;
        }
        let (min, max) = self.range();
        match self {
            ScenarioField::NewHires => f64::from(coerce_count(value.clamp(min, max))),
            ScenarioField::MarketingBoost => coerce_amount(value.min(max)),
            ScenarioField::PriceChange => coerce_percent(value),
        }
    }

    /// Slider increment
    pub fn step(&self) -> f64 {
        match self {
            ScenarioField::MarketingBoost => 5_000.0,
            ScenarioField::NewHires => 1.0,
            ScenarioField::PriceChange => 5.0,
        }
    }

    /// Move `current` by `steps` slider increments, clamped to the slider range
    pub fn nudge(&self, current: f64, steps: i32) -> f64 {
        let (min, max) = self.range();
        (current + f64::from(steps) * self.step()).clamp(min, max)
    }
}

/// Partial update to [`Scenario`]. `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioPatch {
    pub new_hires: Option<u32>,
    pub marketing_boost: Option<f64>,
    pub price_change: Option<f64>,
}

impl ScenarioPatch {
    /// Patch a single lever with a numeric value, coerced into the lever's domain
    pub fn field(field: ScenarioField, value: f64) -> Self {
        let mut patch = Self::default();
        match field {
            ScenarioField::NewHires => {
                patch.new_hires = Some(coerce_count(field.coerce(value)));
            }
            ScenarioField::MarketingBoost => patch.marketing_boost = Some(field.coerce(value)),
            ScenarioField::PriceChange => patch.price_change = Some(field.coerce(value)),
        }
        patch
    }

    pub fn from_raw(field: ScenarioField, raw: &str) -> Self {
        Self::field(field, crate::coerce::parse_number(raw))
    }
}

/// Latest value delivered by the live expense feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveData {
    pub latest_misc_expense: f64,
    /// `None` until the feed has delivered at least once
    pub last_updated: Option<jiff::Timestamp>,
}

/// Usage counters. Only ever incremented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    scenarios_tested: u32,
    reports_exported: u32,
}

impl Usage {
    pub fn scenarios_tested(&self) -> u32 {
        self.scenarios_tested
    }

    pub fn reports_exported(&self) -> u32 {
        self.reports_exported
    }

    pub fn get(&self, counter: UsageCounter) -> u32 {
        match counter {
            UsageCounter::ScenariosTested => self.scenarios_tested,
            UsageCounter::ReportsExported => self.reports_exported,
        }
    }

    pub(crate) fn increment(&mut self, counter: UsageCounter) {
        let slot = match counter {
            UsageCounter::ScenariosTested => &mut self.scenarios_tested,
            UsageCounter::ReportsExported => &mut self.reports_exported,
        };
        *slot = slot.saturating_add(1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UsageCounter {
    ScenariosTested,
    ReportsExported,
}

/// One financial planning unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: SheetId,
    pub name: String,
    pub inputs: Inputs,
    pub scenario: Scenario,
    pub live_data: LiveData,
    pub(crate) usage: Usage,
}

impl Sheet {
    /// Create a sheet with default inputs and zeroed scenario, feed and usage
    pub fn new(id: SheetId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            inputs: Inputs::default(),
            scenario: Scenario::default(),
            live_data: LiveData::default(),
            usage: Usage::default(),
        }
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }
}
