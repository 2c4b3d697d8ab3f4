//! Derived financial metrics
//!
//! None of these types are stored on a sheet. They are produced on demand by
//! [`derive`](crate::derive::derive).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Months of operation fundable from cash on hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Runway {
    /// Whole months at the current burn rate
    Months(u64),
    /// Burn rate is zero; revenue covers expenses
    PositiveCashFlow,
}

impl Runway {
    /// Runway for a given cash balance and monthly burn.
    ///
    /// Burn of zero or less means the sentinel; otherwise the floor of
    /// `cash / burn` in whole months.
    pub fn from_burn(cash_on_hand: f64, burn_rate: f64) -> Self {
        if burn_rate > 0.0 {
            // `as` saturates; cash is never negative
            Runway::Months((cash_on_hand / burn_rate).floor().max(0.0) as u64)
        } else {
            Runway::PositiveCashFlow
        }
    }

    pub fn months(&self) -> Option<u64> {
        match self {
            Runway::Months(m) => Some(*m),
            Runway::PositiveCashFlow => None,
        }
    }

    pub fn health(&self) -> RunwayHealth {
        match self.months() {
            Some(m) if m < 6 => RunwayHealth::Critical,
            Some(m) if m < 12 => RunwayHealth::Caution,
            _ => RunwayHealth::Healthy,
        }
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Runway::Months(m) => write!(f, "{m} months"),
            Runway::PositiveCashFlow => write!(f, "Positive Cash Flow"),
        }
    }
}

/// Coarse classification of a runway for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunwayHealth {
    /// Under six months
    Critical,
    /// Under a year
    Caution,
    Healthy,
}

/// One side (baseline or projected) of the monthly picture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
    pub burn_rate: f64,
    pub runway: Runway,
}

impl Projection {
    pub(crate) fn from_totals(revenue: f64, expenses: f64, cash_on_hand: f64) -> Self {
        let profit = revenue - expenses;
        let burn_rate = if expenses > revenue {
            expenses - revenue
        } else {
            0.0
        };
        Self {
            revenue,
            expenses,
            profit,
            burn_rate,
            runway: Runway::from_burn(cash_on_hand, burn_rate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Operations,
    Marketing,
    Salaries,
    MiscLive,
}

impl ExpenseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Operations => "Operations",
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Salaries => "Salaries",
            ExpenseCategory::MiscLive => "Misc (Live)",
        }
    }
}

/// A named bucket of the projected expense breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExpenseSlice {
    pub category: ExpenseCategory,
    pub amount: f64,
}

/// Base vs projected profit, as a single chart row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfitComparison {
    pub label: &'static str,
    pub base: f64,
    pub projected: f64,
}

/// Everything derived from a sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Metrics {
    pub baseline: Projection,
    pub projected: Projection,
    /// Monthly cost of the scenario's new hires
    pub hire_cost: f64,
    pub marketing_boost: f64,
    pub expense_breakdown: [ExpenseSlice; 4],
    pub profit_comparison: ProfitComparison,
}

impl Metrics {
    /// Sum of the projected expense breakdown
    pub fn breakdown_total(&self) -> f64 {
        self.expense_breakdown.iter().map(|s| s.amount).sum()
    }

    /// Share (0.0..=1.0) of each breakdown bucket in the total.
    /// All zeros when the total is zero.
    pub fn breakdown_shares(&self) -> [(ExpenseCategory, f64); 4] {
        let total = self.breakdown_total();
        self.expense_breakdown.map(|slice| {
            let share = if total > 0.0 {
                slice.amount / total
            } else {
                0.0
            };
            (slice.category, share)
        })
    }
}
