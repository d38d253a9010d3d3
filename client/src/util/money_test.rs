use super::*;

#[test]
fn format_currency_two_decimals() {
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(1500.0), "$1500.00");
    assert_eq!(format_currency(45.999), "$46.00");
}

#[test]
fn format_currency_negative_puts_sign_first() {
    assert_eq!(format_currency(-120.5), "-$120.50");
}

#[test]
fn format_currency_sub_cent_negative_is_unsigned_zero() {
    assert_eq!(format_currency(-0.001), "$0.00");
    assert_eq!(format_currency(-0.0), "$0.00");
    assert_eq!(format_currency(-0.005), "-$0.01");
}

#[test]
fn format_signed_marks_expense_and_income() {
    assert_eq!(format_signed(120.5, true), "-$120.50");
    assert_eq!(format_signed(1500.0, false), "+$1500.00");
}

#[test]
fn bar_percent_scales_and_clamps() {
    assert!((bar_percent(225.0, 450.0) - 50.0).abs() < f64::EPSILON);
    assert!((bar_percent(450.0, 450.0) - 100.0).abs() < f64::EPSILON);
    assert!((bar_percent(900.0, 450.0) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn bar_percent_zero_for_empty_inputs() {
    assert!(bar_percent(10.0, 0.0).abs() < f64::EPSILON);
    assert!(bar_percent(-5.0, 100.0).abs() < f64::EPSILON);
}
