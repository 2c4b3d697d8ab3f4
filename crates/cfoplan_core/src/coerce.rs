//! Coercion of user-entered numbers.
//!
//! Invalid numeric entry is recovered here and never surfaced: anything that
//! does not parse to a finite number becomes 0.

/// Parse raw user entry. Unparseable or non-finite text yields 0.
pub fn parse_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Currency amounts are non-negative
pub fn coerce_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Whole, non-negative head count
pub fn coerce_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // `as` saturates at u32::MAX
    value.trunc() as u32
}

/// Percentage within -50..=50
pub fn coerce_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(-50.0, 50.0)
    } else {
        0.0
    }
}
