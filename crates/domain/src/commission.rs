// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commission and conversion arithmetic.
//!
//! Commission amounts are integer Syrian pounds; fractional pounds are
//! rounded half-up so `50000 * 10% = 5000` exactly and `333 * 10% = 33`.

/// Computes the commission owed for an order.
///
/// `round(amount * percent / 100)` with half-up rounding, in integer
/// arithmetic so the result is exact for the documented cases.
///
/// # Arguments
///
/// * `amount` - The order amount in Syrian pounds
/// * `percent` - The agent's commission percentage (0-100)
#[must_use]
pub fn commission_amount(amount: i64, percent: i32) -> i64 {
    (amount * i64::from(percent) + 50) / 100
}

/// Computes an agent's link-to-paid-order conversion rate.
///
/// Returns `paid_orders / visits * 100` rounded to two decimal places,
/// or `0.0` when there are no visits.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn conversion_rate(paid_orders: i64, visits: i64) -> f64 {
    if visits <= 0 {
        return 0.0;
    }
    let rate: f64 = paid_orders as f64 / visits as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}
