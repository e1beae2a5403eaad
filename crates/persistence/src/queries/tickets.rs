// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gatepass_domain::Ticket;
use tracing::debug;

use crate::data_models::TicketWithOrder;
use crate::diesel_schema::{orders, tickets};
use crate::error::PersistenceError;
use crate::queries::orders::{OrderRow, order_from_row};

/// Diesel Queryable struct for ticket rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = tickets)]
pub(crate) struct TicketRow {
    ticket_id: i64,
    order_id: i64,
    attendee_name: String,
    ticket_number: String,
    ticket_token: String,
    qr_token: String,
    checked_in_at: Option<String>,
    created_at: String,
}

/// Converts a row into the domain `Ticket`.
pub(crate) fn ticket_from_row(row: TicketRow) -> Ticket {
    Ticket {
        ticket_id: Some(row.ticket_id),
        order_id: row.order_id,
        attendee_name: row.attendee_name,
        ticket_number: row.ticket_number,
        ticket_token: row.ticket_token,
        qr_token: row.qr_token,
        checked_in_at: row.checked_in_at,
        created_at: row.created_at,
    }
}

backend_fn! {
/// Retrieves a ticket by its page token, with its owning order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket_token` - The ticket token
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no ticket has the token.
pub fn get_ticket_by_token(
    conn: &mut _,
    ticket_token: &str,
) -> Result<Option<TicketWithOrder>, PersistenceError> {
    debug!("Looking up ticket by token");

    let result: Result<(TicketRow, OrderRow), diesel::result::Error> = tickets::table
        .inner_join(orders::table)
        .filter(tickets::ticket_token.eq(ticket_token))
        .select((TicketRow::as_select(), OrderRow::as_select()))
        .first(conn);

    match result {
        Ok((ticket_row, order_row)) => Ok(Some(TicketWithOrder {
            ticket: ticket_from_row(ticket_row),
            order: order_from_row(order_row)?,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a ticket by its QR token.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `qr_token` - The QR token scanned at the door
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no ticket has the token.
pub fn get_ticket_by_qr_token(
    conn: &mut _,
    qr_token: &str,
) -> Result<Option<Ticket>, PersistenceError> {
    debug!("Looking up ticket by QR token");

    let result: Result<TicketRow, diesel::result::Error> = tickets::table
        .filter(tickets::qr_token.eq(qr_token))
        .select(TicketRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(ticket_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves the ticket issued for an order, if any.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `order_id` - The order ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the order has no ticket.
pub fn get_ticket_by_order(
    conn: &mut _,
    order_id: i64,
) -> Result<Option<Ticket>, PersistenceError> {
    debug!("Looking up ticket for order ID: {}", order_id);

    let result: Result<TicketRow, diesel::result::Error> = tickets::table
        .filter(tickets::order_id.eq(order_id))
        .select(TicketRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(ticket_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all tickets with their orders, newest first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_tickets(conn: &mut _) -> Result<Vec<TicketWithOrder>, PersistenceError> {
    debug!("Listing all tickets");

    let rows: Vec<(TicketRow, OrderRow)> = tickets::table
        .inner_join(orders::table)
        .select((TicketRow::as_select(), OrderRow::as_select()))
        .order_by(tickets::ticket_id.desc())
        .load(conn)?;

    rows.into_iter()
        .map(|(ticket_row, order_row)| {
            Ok(TicketWithOrder {
                ticket: ticket_from_row(ticket_row),
                order: order_from_row(order_row)?,
            })
        })
        .collect()
}
}
