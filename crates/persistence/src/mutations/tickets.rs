// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gatepass_domain::Ticket;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::CheckinOutcome;
use crate::diesel_schema::tickets;
use crate::error::PersistenceError;
use crate::queries::tickets::{get_ticket_by_qr_token_mysql, get_ticket_by_qr_token_sqlite};

backend_fn! {
/// Creates a new ticket.
///
/// The `order_id` column is unique, so concurrent issuance for the same
/// order surfaces as a `UniqueViolation` rather than a second ticket.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `ticket` - The ticket to persist (without an ID)
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the order already has
/// a ticket or a token collides, or another error if the insert fails.
pub fn create_ticket(conn: &mut _, ticket: &Ticket) -> Result<i64, PersistenceError> {
    info!(
        "Creating ticket {} for order ID: {}",
        ticket.ticket_number, ticket.order_id
    );

    diesel::insert_into(tickets::table)
        .values((
            tickets::order_id.eq(ticket.order_id),
            tickets::attendee_name.eq(&ticket.attendee_name),
            tickets::ticket_number.eq(&ticket.ticket_number),
            tickets::ticket_token.eq(&ticket.ticket_token),
            tickets::qr_token.eq(&ticket.qr_token),
            tickets::created_at.eq(&ticket.created_at),
        ))
        .execute(conn)?;

    let ticket_id: i64 = conn.get_last_insert_rowid()?;

    info!(ticket_id, "Ticket created successfully");

    Ok(ticket_id)
}
}

/// Consumes a ticket at the door (`SQLite` version).
///
/// The write guards on `checked_in_at IS NULL`, so only the first scan
/// sets the timestamp; `first_scan` in the outcome reports which side of
/// the race this call was on. Repeat scans receive the ticket with its
/// original timestamp.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `qr_token` - The scanned QR token
/// * `checked_in_at` - The timestamp to record for a first scan
///
/// # Errors
///
/// Returns an error if a database operation fails.
/// Returns `Ok(None)` if no ticket has the token.
pub fn check_in_ticket_sqlite(
    conn: &mut SqliteConnection,
    qr_token: &str,
    checked_in_at: &str,
) -> Result<Option<CheckinOutcome>, PersistenceError> {
    let rows_affected: usize = diesel::update(tickets::table)
        .filter(tickets::qr_token.eq(qr_token))
        .filter(tickets::checked_in_at.is_null())
        .set(tickets::checked_in_at.eq(Some(checked_in_at)))
        .execute(conn)?;

    let Some(ticket) = get_ticket_by_qr_token_sqlite(conn, qr_token)? else {
        return Ok(None);
    };

    if rows_affected > 0 {
        info!(
            "Checked in ticket {} for {}",
            ticket.ticket_number, ticket.attendee_name
        );
    }

    Ok(Some(CheckinOutcome {
        ticket,
        first_scan: rows_affected > 0,
    }))
}

/// Consumes a ticket at the door (`MySQL` version).
///
/// See [`check_in_ticket_sqlite`] for semantics.
///
/// # Errors
///
/// Returns an error if a database operation fails.
/// Returns `Ok(None)` if no ticket has the token.
pub fn check_in_ticket_mysql(
    conn: &mut MysqlConnection,
    qr_token: &str,
    checked_in_at: &str,
) -> Result<Option<CheckinOutcome>, PersistenceError> {
    let rows_affected: usize = diesel::update(tickets::table)
        .filter(tickets::qr_token.eq(qr_token))
        .filter(tickets::checked_in_at.is_null())
        .set(tickets::checked_in_at.eq(Some(checked_in_at)))
        .execute(conn)?;

    let Some(ticket) = get_ticket_by_qr_token_mysql(conn, qr_token)? else {
        return Ok(None);
    };

    if rows_affected > 0 {
        info!(
            "Checked in ticket {} for {}",
            ticket.ticket_number, ticket.attendee_name
        );
    }

    Ok(Some(CheckinOutcome {
        ticket,
        first_scan: rows_affected > 0,
    }))
}
