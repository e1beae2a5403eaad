// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commission queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gatepass_domain::{Commission, CommissionStatus};
use tracing::debug;

use crate::diesel_schema::commissions;
use crate::error::PersistenceError;

/// Diesel Queryable struct for commission rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = commissions)]
pub(crate) struct CommissionRow {
    commission_id: i64,
    agent_id: i64,
    order_id: i64,
    commission_amount: i64,
    status: String,
    created_at: String,
}

/// Converts a row into the domain `Commission`.
pub(crate) fn commission_from_row(row: CommissionRow) -> Result<Commission, PersistenceError> {
    let status: CommissionStatus = row
        .status
        .parse()
        .map_err(|e: gatepass_domain::DomainError| {
            PersistenceError::InvalidStoredValue(e.to_string())
        })?;

    Ok(Commission {
        commission_id: Some(row.commission_id),
        agent_id: row.agent_id,
        order_id: row.order_id,
        commission_amount: row.commission_amount,
        status,
        created_at: row.created_at,
    })
}

backend_fn! {
/// Retrieves the commission for an order, if any.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `order_id` - The order ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the order has no commission.
pub fn get_commission_by_order(
    conn: &mut _,
    order_id: i64,
) -> Result<Option<Commission>, PersistenceError> {
    debug!("Looking up commission for order ID: {}", order_id);

    let result: Result<CommissionRow, diesel::result::Error> = commissions::table
        .filter(commissions::order_id.eq(order_id))
        .select(CommissionRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(commission_from_row(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all commissions, newest first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_commissions(conn: &mut _) -> Result<Vec<Commission>, PersistenceError> {
    debug!("Listing all commissions");

    let rows: Vec<CommissionRow> = commissions::table
        .select(CommissionRow::as_select())
        .order_by(commissions::commission_id.desc())
        .load(conn)?;

    rows.into_iter().map(commission_from_row).collect()
}
}

backend_fn! {
/// Lists commissions owed to one agent, newest first.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `agent_id` - The agent ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_commissions_for_agent(
    conn: &mut _,
    agent_id: i64,
) -> Result<Vec<Commission>, PersistenceError> {
    debug!("Listing commissions for agent ID: {}", agent_id);

    let rows: Vec<CommissionRow> = commissions::table
        .filter(commissions::agent_id.eq(agent_id))
        .select(CommissionRow::as_select())
        .order_by(commissions::commission_id.desc())
        .load(conn)?;

    rows.into_iter().map(commission_from_row).collect()
}
}
