// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{commission_amount, conversion_rate, format_ticket_number};

#[test]
fn test_commission_exact_percentage() {
    assert_eq!(commission_amount(50000, 10), 5000);
    assert_eq!(commission_amount(50000, 0), 0);
    assert_eq!(commission_amount(50000, 100), 50000);
}

#[test]
fn test_commission_rounds_half_up() {
    // 333 * 10% = 33.3 -> 33
    assert_eq!(commission_amount(333, 10), 33);
    // 335 * 10% = 33.5 -> 34
    assert_eq!(commission_amount(335, 10), 34);
    // 15 * 33% = 4.95 -> 5
    assert_eq!(commission_amount(15, 33), 5);
}

#[test]
fn test_commission_zero_amount() {
    assert_eq!(commission_amount(0, 50), 0);
}

#[test]
fn test_conversion_rate_no_visits_is_zero() {
    let rate = conversion_rate(5, 0);
    assert!((rate - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_conversion_rate_rounds_to_two_decimals() {
    // 1 paid out of 3 visits = 33.333...% -> 33.33
    let rate = conversion_rate(1, 3);
    assert!((rate - 33.33).abs() < f64::EPSILON);

    // 2 paid out of 3 visits = 66.666...% -> 66.67
    let rate = conversion_rate(2, 3);
    assert!((rate - 66.67).abs() < f64::EPSILON);
}

#[test]
fn test_conversion_rate_full_conversion() {
    let rate = conversion_rate(4, 4);
    assert!((rate - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_ticket_number_formatting() {
    assert_eq!(format_ticket_number(1), "EVT2026-000001");
    assert_eq!(format_ticket_number(42), "EVT2026-000042");
    assert_eq!(format_ticket_number(999_999), "EVT2026-999999");
}

#[test]
fn test_ticket_number_beyond_padding_width() {
    // Serials past six digits widen rather than truncate
    assert_eq!(format_ticket_number(1_000_000), "EVT2026-1000000");
}
