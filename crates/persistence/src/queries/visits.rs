// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Link visit queries.
//!
//! Visits are append-only; these queries feed the per-agent conversion
//! statistics on the admin dashboard.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gatepass_domain::LinkVisit;
use tracing::debug;

use crate::diesel_schema::link_visits;
use crate::error::PersistenceError;

/// Diesel Queryable struct for link visit rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = link_visits)]
pub(crate) struct LinkVisitRow {
    visit_id: i64,
    agent_code: String,
    agent_id: Option<i64>,
    visited_at: String,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

/// Converts a row into the domain `LinkVisit`.
pub(crate) fn visit_from_row(row: LinkVisitRow) -> LinkVisit {
    LinkVisit {
        visit_id: Some(row.visit_id),
        agent_code: row.agent_code,
        agent_id: row.agent_id,
        visited_at: row.visited_at,
        ip_address: row.ip_address,
        user_agent: row.user_agent,
    }
}

backend_fn! {
/// Lists all link visits, newest first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_visits(conn: &mut _) -> Result<Vec<LinkVisit>, PersistenceError> {
    debug!("Listing all link visits");

    let rows: Vec<LinkVisitRow> = link_visits::table
        .select(LinkVisitRow::as_select())
        .order_by(link_visits::visit_id.desc())
        .load(conn)?;

    Ok(rows.into_iter().map(visit_from_row).collect())
}
}

backend_fn! {
/// Counts visits attributed to one agent.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `agent_id` - The agent ID
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn count_visits_for_agent(conn: &mut _, agent_id: i64) -> Result<i64, PersistenceError> {
    use diesel::dsl::count;

    debug!("Counting visits for agent ID: {}", agent_id);

    let count: i64 = link_visits::table
        .filter(link_visits::agent_id.eq(agent_id))
        .select(count(link_visits::visit_id))
        .first(conn)?;

    Ok(count)
}
}
