//! Currency formatting for dashboard and list views.

#[cfg(test)]
#[path = "money_test.rs"]
mod money_test;

/// `$` followed by the value with two decimals.
///
/// The sign follows the rounded value, so sub-cent negatives print as `$0.00`.
pub fn format_currency(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${:.2}", rounded.abs())
}

/// Transaction amount with a leading `-` for expenses and `+` for income.
pub fn format_signed(amount: f64, is_expense: bool) -> String {
    let sign = if is_expense { '-' } else { '+' };
    format!("{sign}${:.2}", amount.abs())
}

/// Bar width for `amount` relative to `max`, clamped to `0..=100`.
pub fn bar_percent(amount: f64, max: f64) -> f64 {
    if max <= 0.0 || amount <= 0.0 {
        return 0.0;
    }
    (amount / max * 100.0).min(100.0)
}
