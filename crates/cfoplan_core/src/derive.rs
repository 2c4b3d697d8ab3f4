//! Derivation of baseline and projected metrics from a sheet.
//!
//! Metrics are recomputed on every read and never cached.

use crate::model::{ExpenseCategory, ExpenseSlice, Metrics, ProfitComparison, Projection, Sheet};

/// Fixed monthly cost of one scenario hire
pub const HIRE_MONTHLY_COST: f64 = 50_000.0;

/// Derive all metrics for a sheet. Pure: same sheet, same metrics.
pub fn derive(sheet: &Sheet) -> Metrics {
    let inputs = &sheet.inputs;
    let scenario = &sheet.scenario;
    let misc = sheet.live_data.latest_misc_expense;

    let base_expenses = inputs.op_ex + inputs.marketing_ex + inputs.salaries_ex + misc;
    let baseline =
        Projection::from_totals(inputs.monthly_revenue, base_expenses, inputs.cash_on_hand);

    let hire_cost = f64::from(scenario.new_hires) * HIRE_MONTHLY_COST;
    let projected_revenue = inputs.monthly_revenue * (1.0 + scenario.price_change / 100.0);
    let projected_salaries = inputs.salaries_ex + hire_cost;
    let projected_marketing = inputs.marketing_ex + scenario.marketing_boost;
    let projected_expenses = inputs.op_ex + projected_marketing + projected_salaries + misc;
    let projected =
        Projection::from_totals(projected_revenue, projected_expenses, inputs.cash_on_hand);

    Metrics {
        baseline,
        projected,
        hire_cost,
        marketing_boost: scenario.marketing_boost,
        expense_breakdown: [
            ExpenseSlice {
                category: ExpenseCategory::Operations,
                amount: inputs.op_ex,
            },
            ExpenseSlice {
                category: ExpenseCategory::Marketing,
                amount: projected_marketing,
            },
            ExpenseSlice {
                category: ExpenseCategory::Salaries,
                amount: projected_salaries,
            },
            ExpenseSlice {
                category: ExpenseCategory::MiscLive,
                amount: misc,
            },
        ],
        profit_comparison: ProfitComparison {
            label: "Profit/Loss",
            base: baseline.profit,
            projected: projected.profit,
        },
    }
}
