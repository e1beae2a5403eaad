// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Order queries.
//!
//! Order reads attach the referring agent via a left join so callers
//! never issue a second lookup for attribution.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gatepass_domain::{Order, OrderStatus, PaymentMethod};
use tracing::debug;

use crate::data_models::OrderWithAgent;
use crate::diesel_schema::{agents, orders};
use crate::error::PersistenceError;
use crate::queries::agents::{AgentRow, agent_from_row};

/// Diesel Queryable struct for order rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = orders)]
pub(crate) struct OrderRow {
    order_id: i64,
    order_token: String,
    amount: i64,
    method: Option<String>,
    phone: Option<String>,
    reference_code: String,
    status: String,
    paid_at: Option<String>,
    agent_id: Option<i64>,
    entered_verification_code: Option<String>,
    created_at: String,
}

/// Converts a row into the domain `Order`.
///
/// Status and method columns are constrained by CHECK clauses, so a
/// parse failure here means the stored data is corrupt.
pub(crate) fn order_from_row(row: OrderRow) -> Result<Order, PersistenceError> {
    let status: OrderStatus = row
        .status
        .parse()
        .map_err(|e: gatepass_domain::DomainError| {
            PersistenceError::InvalidStoredValue(e.to_string())
        })?;
    let method: Option<PaymentMethod> = row
        .method
        .map(|m| {
            m.parse().map_err(|e: gatepass_domain::DomainError| {
                PersistenceError::InvalidStoredValue(e.to_string())
            })
        })
        .transpose()?;

    Ok(Order {
        order_id: Some(row.order_id),
        order_token: row.order_token,
        amount: row.amount,
        method,
        phone: row.phone,
        reference_code: row.reference_code,
        status,
        paid_at: row.paid_at,
        agent_id: row.agent_id,
        entered_verification_code: row.entered_verification_code,
        created_at: row.created_at,
    })
}

backend_fn! {
/// Retrieves an order by its opaque token, with the referring agent.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `order_token` - The order token
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no order has the token.
pub fn get_order_by_token(
    conn: &mut _,
    order_token: &str,
) -> Result<Option<OrderWithAgent>, PersistenceError> {
    debug!("Looking up order by token");

    let result: Result<(OrderRow, Option<AgentRow>), diesel::result::Error> = orders::table
        .left_join(agents::table)
        .filter(orders::order_token.eq(order_token))
        .select((OrderRow::as_select(), Option::<AgentRow>::as_select()))
        .first(conn);

    match result {
        Ok((order_row, agent_row)) => Ok(Some(OrderWithAgent {
            order: order_from_row(order_row)?,
            agent: agent_row.map(agent_from_row),
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves an order by its reconciliation reference code.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reference_code` - The reference code (e.g., `EVT-K7Q2M`)
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no order has the code.
pub fn get_order_by_reference_code(
    conn: &mut _,
    reference_code: &str,
) -> Result<Option<OrderWithAgent>, PersistenceError> {
    debug!("Looking up order by reference code: {}", reference_code);

    let result: Result<(OrderRow, Option<AgentRow>), diesel::result::Error> = orders::table
        .left_join(agents::table)
        .filter(orders::reference_code.eq(reference_code))
        .select((OrderRow::as_select(), Option::<AgentRow>::as_select()))
        .first(conn);

    match result {
        Ok((order_row, agent_row)) => Ok(Some(OrderWithAgent {
            order: order_from_row(order_row)?,
            agent: agent_row.map(agent_from_row),
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all orders with attribution, newest first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_orders(conn: &mut _) -> Result<Vec<OrderWithAgent>, PersistenceError> {
    debug!("Listing all orders");

    let rows: Vec<(OrderRow, Option<AgentRow>)> = orders::table
        .left_join(agents::table)
        .select((OrderRow::as_select(), Option::<AgentRow>::as_select()))
        .order_by(orders::order_id.desc())
        .load(conn)?;

    rows.into_iter()
        .map(|(order_row, agent_row)| {
            Ok(OrderWithAgent {
                order: order_from_row(order_row)?,
                agent: agent_row.map(agent_from_row),
            })
        })
        .collect()
}
}

backend_fn! {
/// Checks whether a reference code is already assigned.
///
/// Used by the unique-code generator to detect collisions before
/// insertion.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `reference_code` - The candidate code
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn reference_code_exists(
    conn: &mut _,
    reference_code: &str,
) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = orders::table
        .filter(orders::reference_code.eq(reference_code))
        .select(count(orders::order_id))
        .first(conn)?;

    Ok(count > 0)
}
}
