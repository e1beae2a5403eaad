// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order mutations.
//!
//! The status transitions here are conditional writes: the `PENDING`
//! guard is part of the UPDATE statement, so concurrent mark-paid or
//! mark-failed requests cannot both win and a terminal order is never
//! rewritten.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gatepass_domain::{Order, OrderStatus, PaymentMethod};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::{FailedTransition, PaidTransition};
use crate::diesel_schema::orders;
use crate::error::PersistenceError;
use crate::queries::orders::{get_order_by_token_mysql, get_order_by_token_sqlite};

backend_fn! {
/// Creates a new order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `order` - The order to persist (without an ID)
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the order token or
/// reference code collides, or another error if the insert fails.
pub fn create_order(conn: &mut _, order: &Order) -> Result<i64, PersistenceError> {
    info!(
        "Creating order with reference code: {}, amount: {}, agent: {:?}",
        order.reference_code, order.amount, order.agent_id
    );

    diesel::insert_into(orders::table)
        .values((
            orders::order_token.eq(&order.order_token),
            orders::amount.eq(order.amount),
            orders::method.eq(order.method.map(|m| m.as_str())),
            orders::phone.eq(&order.phone),
            orders::reference_code.eq(&order.reference_code),
            orders::status.eq(order.status.as_str()),
            orders::agent_id.eq(order.agent_id),
            orders::created_at.eq(&order.created_at),
        ))
        .execute(conn)?;

    let order_id: i64 = conn.get_last_insert_rowid()?;

    info!(order_id, "Order created successfully");

    Ok(order_id)
}
}

backend_fn! {
/// Saves the buyer's chosen payment method and phone number.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `order_token` - The order token
/// * `method` - The chosen payment method
/// * `phone` - The buyer's wallet phone number
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no order has the token.
pub fn set_payment_details(
    conn: &mut _,
    order_token: &str,
    method: PaymentMethod,
    phone: &str,
) -> Result<(), PersistenceError> {
    info!("Saving payment details (method: {})", method.as_str());

    let rows_affected: usize = diesel::update(orders::table)
        .filter(orders::order_token.eq(order_token))
        .set((
            orders::method.eq(Some(method.as_str())),
            orders::phone.eq(Some(phone)),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(
            "Order not found for payment details update".to_string(),
        ));
    }

    Ok(())
}
}

backend_fn! {
/// Saves the buyer-entered transfer confirmation code.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `order_token` - The order token
/// * `verification_code` - The normalized confirmation code
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no order has the token.
pub fn save_verification_code(
    conn: &mut _,
    order_token: &str,
    verification_code: &str,
) -> Result<(), PersistenceError> {
    info!("Saving verification code for order");

    let rows_affected: usize = diesel::update(orders::table)
        .filter(orders::order_token.eq(order_token))
        .set(orders::entered_verification_code.eq(Some(verification_code)))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(
            "Order not found for verification code update".to_string(),
        ));
    }

    Ok(())
}
}

/// Marks an order paid if it is still pending (`SQLite` version).
///
/// The write carries a `status = 'PENDING'` guard; `transitioned` in the
/// result reports whether this call won the transition. The order is
/// re-read afterwards, so repeats observe the paid state without
/// modifying it.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `order_token` - The order token
/// * `paid_at` - The timestamp to record for the winning transition
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no order has the token.
pub fn mark_order_paid_sqlite(
    conn: &mut SqliteConnection,
    order_token: &str,
    paid_at: &str,
) -> Result<PaidTransition, PersistenceError> {
    info!("Marking order paid");

    let rows_affected: usize = diesel::update(orders::table)
        .filter(orders::order_token.eq(order_token))
        .filter(orders::status.eq(OrderStatus::Pending.as_str()))
        .set((
            orders::status.eq(OrderStatus::Paid.as_str()),
            orders::paid_at.eq(Some(paid_at)),
        ))
        .execute(conn)?;

    let order: Order = get_order_by_token_sqlite(conn, order_token)?
        .ok_or_else(|| PersistenceError::NotFound("Order not found for mark-paid".to_string()))?
        .order;

    Ok(PaidTransition {
        order,
        transitioned: rows_affected > 0,
    })
}

/// Marks an order paid if it is still pending (`MySQL` version).
///
/// See [`mark_order_paid_sqlite`] for semantics.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no order has the token.
pub fn mark_order_paid_mysql(
    conn: &mut MysqlConnection,
    order_token: &str,
    paid_at: &str,
) -> Result<PaidTransition, PersistenceError> {
    info!("Marking order paid");

    let rows_affected: usize = diesel::update(orders::table)
        .filter(orders::order_token.eq(order_token))
        .filter(orders::status.eq(OrderStatus::Pending.as_str()))
        .set((
            orders::status.eq(OrderStatus::Paid.as_str()),
            orders::paid_at.eq(Some(paid_at)),
        ))
        .execute(conn)?;

    let order: Order = get_order_by_token_mysql(conn, order_token)?
        .ok_or_else(|| PersistenceError::NotFound("Order not found for mark-paid".to_string()))?
        .order;

    Ok(PaidTransition {
        order,
        transitioned: rows_affected > 0,
    })
}

/// Marks an order failed if it is still pending (`SQLite` version).
///
/// A pure status flip with the same `PENDING` guard as mark-paid;
/// `paid_at` is never touched.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `order_token` - The order token
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no order has the token.
pub fn mark_order_failed_sqlite(
    conn: &mut SqliteConnection,
    order_token: &str,
) -> Result<FailedTransition, PersistenceError> {
    info!("Marking order failed");

    let rows_affected: usize = diesel::update(orders::table)
        .filter(orders::order_token.eq(order_token))
        .filter(orders::status.eq(OrderStatus::Pending.as_str()))
        .set(orders::status.eq(OrderStatus::Failed.as_str()))
        .execute(conn)?;

    let order: Order = get_order_by_token_sqlite(conn, order_token)?
        .ok_or_else(|| PersistenceError::NotFound("Order not found for mark-failed".to_string()))?
        .order;

    Ok(FailedTransition {
        order,
        transitioned: rows_affected > 0,
    })
}

/// Marks an order failed if it is still pending (`MySQL` version).
///
/// See [`mark_order_failed_sqlite`] for semantics.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no order has the token.
pub fn mark_order_failed_mysql(
    conn: &mut MysqlConnection,
    order_token: &str,
) -> Result<FailedTransition, PersistenceError> {
    info!("Marking order failed");

    let rows_affected: usize = diesel::update(orders::table)
        .filter(orders::order_token.eq(order_token))
        .filter(orders::status.eq(OrderStatus::Pending.as_str()))
        .set(orders::status.eq(OrderStatus::Failed.as_str()))
        .execute(conn)?;

    let order: Order = get_order_by_token_mysql(conn, order_token)?
        .ok_or_else(|| PersistenceError::NotFound("Order not found for mark-failed".to_string()))?
        .order;

    Ok(FailedTransition {
        order,
        transitioned: rows_affected > 0,
    })
}
