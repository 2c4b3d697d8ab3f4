//! Derivation engine tests

use super::example_sheet;
use crate::derive::{HIRE_MONTHLY_COST, derive};
use crate::model::{ExpenseCategory, Inputs, Runway, Scenario};

#[test]
fn test_baseline_example_is_cash_flow_positive() {
    let sheet = example_sheet(Scenario::default());
    let metrics = derive(&sheet);

    assert_eq!(metrics.baseline.revenue, 500_000.0);
    assert_eq!(metrics.baseline.expenses, 445_000.0);
    assert_eq!(metrics.baseline.profit, 55_000.0);
    assert_eq!(metrics.baseline.burn_rate, 0.0);
    assert_eq!(metrics.baseline.runway, Runway::PositiveCashFlow);
}

#[test]
fn test_projected_example_with_hires_boost_and_price_cut() {
    let sheet = example_sheet(Scenario {
        new_hires: 2,
        marketing_boost: 10_000.0,
        price_change: -10.0,
    });
    let metrics = derive(&sheet);

    assert_eq!(metrics.projected.revenue, 450_000.0);
    assert_eq!(metrics.expense_breakdown[2].amount, 350_000.0);
    assert_eq!(metrics.expense_breakdown[1].amount, 85_000.0);
    assert_eq!(metrics.projected.expenses, 555_000.0);
    assert_eq!(metrics.projected.profit, -105_000.0);
    assert_eq!(metrics.projected.burn_rate, 105_000.0);
    assert_eq!(metrics.projected.runway, Runway::Months(19));
    assert_eq!(metrics.hire_cost, 2.0 * HIRE_MONTHLY_COST);

    // Baseline is untouched by the scenario
    assert_eq!(metrics.baseline.expenses, 445_000.0);
    assert_eq!(metrics.baseline.runway, Runway::PositiveCashFlow);
}

#[test]
fn test_live_misc_expense_feeds_both_sides() {
    let mut sheet = example_sheet(Scenario::default());
    sheet.live_data.latest_misc_expense = 60_000.0;
    let metrics = derive(&sheet);

    assert_eq!(metrics.baseline.expenses, 505_000.0);
    assert_eq!(metrics.baseline.burn_rate, 5_000.0);
    assert_eq!(metrics.baseline.runway, Runway::Months(400));
    assert_eq!(metrics.projected.expenses, 505_000.0);
    assert_eq!(metrics.expense_breakdown[3].amount, 60_000.0);
}

#[test]
fn test_exact_break_even_uses_sentinel() {
    let mut sheet = example_sheet(Scenario::default());
    sheet.inputs.monthly_revenue = 445_000.0;
    let metrics = derive(&sheet);

    assert_eq!(metrics.baseline.profit, 0.0);
    assert_eq!(metrics.baseline.burn_rate, 0.0);
    assert_eq!(metrics.baseline.runway, Runway::PositiveCashFlow);
    assert_eq!(metrics.projected.runway, Runway::PositiveCashFlow);
}

#[test]
fn test_runway_floors_instead_of_rounding() {
    // 1_000_000 / 300_000 = 3.33.., 1_000_000 / 110_000 = 9.09..
    assert_eq!(Runway::from_burn(1_000_000.0, 300_000.0), Runway::Months(3));
    assert_eq!(Runway::from_burn(1_000_000.0, 110_000.0), Runway::Months(9));
    // 0.99.. months is still zero whole months
    assert_eq!(Runway::from_burn(99_999.0, 100_000.0), Runway::Months(0));
}

#[test]
fn test_runway_non_increasing_as_burn_grows() {
    let cash = 2_000_000.0;
    let mut previous = u64::MAX;
    for burn in (1..=200).map(|k| f64::from(k) * 5_000.0) {
        let months = Runway::from_burn(cash, burn).months().unwrap();
        assert!(months <= previous, "runway grew at burn {burn}");
        previous = months;
    }

    // Whenever the quotient changes, runway strictly drops
    assert!(
        Runway::from_burn(cash, 100_000.0).months() > Runway::from_burn(cash, 105_000.0).months()
    );
}

#[test]
fn test_zero_and_negative_burn_yield_sentinel() {
    assert_eq!(Runway::from_burn(1_000.0, 0.0), Runway::PositiveCashFlow);
    assert_eq!(Runway::from_burn(1_000.0, -5.0), Runway::PositiveCashFlow);
}

#[test]
fn test_derive_is_pure() {
    let mut sheet = example_sheet(Scenario {
        new_hires: 3,
        marketing_boost: 25_000.0,
        price_change: 15.0,
    });
    sheet.live_data.latest_misc_expense = 7_500.0;
    let before = sheet.clone();

    let first = derive(&sheet);
    let second = derive(&sheet);

    assert_eq!(first, second);
    assert_eq!(sheet, before);
}

#[test]
fn test_breakdown_buckets_and_comparison_row() {
    let mut sheet = example_sheet(Scenario {
        new_hires: 1,
        marketing_boost: 5_000.0,
        price_change: 0.0,
    });
    sheet.live_data.latest_misc_expense = 12_000.0;
    let metrics = derive(&sheet);

    let categories: Vec<_> = metrics.expense_breakdown.iter().map(|s| s.category).collect();
    assert_eq!(
        categories,
        vec![
            ExpenseCategory::Operations,
            ExpenseCategory::Marketing,
            ExpenseCategory::Salaries,
            ExpenseCategory::MiscLive,
        ]
    );
    assert_eq!(metrics.expense_breakdown[0].amount, 120_000.0);
    assert_eq!(metrics.expense_breakdown[1].amount, 80_000.0);
    assert_eq!(metrics.expense_breakdown[2].amount, 300_000.0);
    assert_eq!(metrics.breakdown_total(), metrics.projected.expenses);

    assert_eq!(metrics.profit_comparison.label, "Profit/Loss");
    assert_eq!(metrics.profit_comparison.base, metrics.baseline.profit);
    assert_eq!(metrics.profit_comparison.projected, metrics.projected.profit);
}

#[test]
fn test_breakdown_shares_sum_to_one() {
    let metrics = derive(&example_sheet(Scenario::default()));
    let total: f64 = metrics.breakdown_shares().iter().map(|(_, s)| s).sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_breakdown_shares_all_zero_for_empty_sheet() {
    let mut sheet = example_sheet(Scenario::default());
    sheet.inputs = Inputs {
        monthly_revenue: 0.0,
        op_ex: 0.0,
        marketing_ex: 0.0,
        salaries_ex: 0.0,
        cash_on_hand: 0.0,
    };
    let metrics = derive(&sheet);

    assert!(metrics.breakdown_shares().iter().all(|(_, s)| *s == 0.0));
    assert_eq!(metrics.baseline.runway, Runway::PositiveCashFlow);
}

#[test]
fn test_zero_cash_with_deficit_is_zero_months() {
    let mut sheet = example_sheet(Scenario {
        new_hires: 5,
        ..Default::default()
    });
    sheet.inputs.cash_on_hand = 0.0;
    let metrics = derive(&sheet);

    assert_eq!(metrics.projected.runway, Runway::Months(0));
}
