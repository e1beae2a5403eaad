// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Link visit mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gatepass_domain::LinkVisit;
use tracing::debug;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::link_visits;
use crate::error::PersistenceError;

backend_fn! {
/// Records one referral link visit.
///
/// Visits are append-only; there is nothing to update or delete.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `visit` - The visit to persist (without an ID)
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn record_visit(conn: &mut _, visit: &LinkVisit) -> Result<i64, PersistenceError> {
    debug!("Recording visit for agent code: {}", visit.agent_code);

    diesel::insert_into(link_visits::table)
        .values((
            link_visits::agent_code.eq(&visit.agent_code),
            link_visits::agent_id.eq(visit.agent_id),
            link_visits::visited_at.eq(&visit.visited_at),
            link_visits::ip_address.eq(&visit.ip_address),
            link_visits::user_agent.eq(&visit.user_agent),
        ))
        .execute(conn)?;

    conn.get_last_insert_rowid()
}
}
