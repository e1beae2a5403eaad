// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ticket serial allocation.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::diesel_schema::ticket_counter;
use crate::error::PersistenceError;

backend_fn! {
/// Allocates the next ticket serial number.
///
/// Increments the single counter row and reads it back inside one
/// transaction, so concurrent registrations never mint the same serial.
/// The first allocation returns 1.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn next_ticket_number(conn: &mut _) -> Result<i64, PersistenceError> {
    let value: i64 = conn.transaction(|conn| {
        diesel::update(ticket_counter::table)
            .filter(ticket_counter::counter_id.eq(1))
            .set(ticket_counter::value.eq(ticket_counter::value + 1))
            .execute(conn)?;

        ticket_counter::table
            .filter(ticket_counter::counter_id.eq(1))
            .select(ticket_counter::value)
            .first::<i64>(conn)
    })?;

    debug!("Allocated ticket serial: {}", value);
    Ok(value)
}
}
