//! Display formatting for currency amounts.
//!
//! Amounts use the rupee symbol with Indian digit grouping: the last three
//! digits form one group and every two digits before that form another
//! (`12,34,567`). Fractions are shown to two places only when non-zero.

pub const CURRENCY_SYMBOL: &str = "₹";

/// Group the integer digits of a non-negative whole number
fn group_indian(whole: u64) -> String {
    let digits = whole.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a number with Indian grouping, no symbol (e.g. `-1,05,000`, `4,50,000.5`)
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let cents_total = (value.abs() * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;
    let sign = if value < 0.0 && cents_total > 0 { "-" } else { "" };

    if cents == 0 {
        format!("{}{}", sign, group_indian(whole))
    } else if cents % 10 == 0 {
        format!("{}{}.{}", sign, group_indian(whole), cents / 10)
    } else {
        format!("{}{}.{:02}", sign, group_indian(whole), cents)
    }
}

/// Format a currency value, symbol first (e.g. `₹5,00,000`, `₹-1,05,000`)
pub fn format_currency(value: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, format_grouped(value))
}

/// Compact form for tight columns (e.g. `₹20L`, `₹4.5k`)
pub fn format_compact_currency(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 10_000_000.0 {
        format!("{}{}{:.1}Cr", sign, CURRENCY_SYMBOL, abs_value / 10_000_000.0)
    } else if abs_value >= 100_000.0 {
        format!("{}{}{:.1}L", sign, CURRENCY_SYMBOL, abs_value / 100_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{}{}{:.1}k", sign, CURRENCY_SYMBOL, abs_value / 1_000.0)
    } else {
        format!("{}{}{:.0}", sign, CURRENCY_SYMBOL, abs_value)
    }
}

/// Format a share (0.0..=1.0) as a whole percentage
pub fn format_share(share: f64) -> String {
    format!("{:.0}%", share * 100.0)
}
