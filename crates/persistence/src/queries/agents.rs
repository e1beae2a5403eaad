// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Agent queries.
//!
//! This module contains backend-agnostic queries for retrieving agents
//! and resolving referral codes. All queries use Diesel DSL and work
//! across all supported database backends.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gatepass_domain::Agent;
use tracing::debug;

use crate::diesel_schema::{agents, commissions, link_visits, orders};
use crate::error::PersistenceError;

/// Diesel Queryable struct for agent rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = agents)]
pub(crate) struct AgentRow {
    agent_id: i64,
    name: String,
    code: String,
    commission_percent: i32,
    created_at: String,
}

/// Converts a row into the domain `Agent`.
pub(crate) fn agent_from_row(row: AgentRow) -> Agent {
    Agent::with_id(
        row.agent_id,
        row.name,
        row.code,
        row.commission_percent,
        row.created_at,
    )
}

backend_fn! {
/// Retrieves an agent by referral code.
///
/// Codes are stored exactly as generated (uppercase alphabet), so the
/// lookup is exact-match.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `code` - The referral code to resolve
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no agent has the code.
pub fn get_agent_by_code(conn: &mut _, code: &str) -> Result<Option<Agent>, PersistenceError> {
    debug!("Looking up agent by code: {}", code);

    let result: Result<AgentRow, diesel::result::Error> = agents::table
        .filter(agents::code.eq(code))
        .select(AgentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(agent_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves an agent by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `agent_id` - The agent ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the agent is not found.
pub fn get_agent_by_id(conn: &mut _, agent_id: i64) -> Result<Option<Agent>, PersistenceError> {
    debug!("Looking up agent by ID: {}", agent_id);

    let result: Result<AgentRow, diesel::result::Error> = agents::table
        .filter(agents::agent_id.eq(agent_id))
        .select(AgentRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(agent_from_row(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all agents, ordered by name.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_agents(conn: &mut _) -> Result<Vec<Agent>, PersistenceError> {
    debug!("Listing all agents");

    let rows: Vec<AgentRow> = agents::table
        .select(AgentRow::as_select())
        .order_by(agents::name.asc())
        .load(conn)?;

    Ok(rows.into_iter().map(agent_from_row).collect())
}
}

backend_fn! {
/// Checks whether a referral code is already assigned.
///
/// Used by the unique-code generator to detect collisions before
/// insertion.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `code` - The candidate code
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn agent_code_exists(conn: &mut _, code: &str) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    let count: i64 = agents::table
        .filter(agents::code.eq(code))
        .select(count(agents::agent_id))
        .first(conn)?;

    Ok(count > 0)
}
}

backend_fn! {
/// Checks if an agent is referenced by orders, commissions, or visits.
///
/// Referenced agents cannot be deleted; their history must survive for
/// reconciliation.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `agent_id` - The agent ID to check
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn is_agent_referenced(conn: &mut _, agent_id: i64) -> Result<bool, PersistenceError> {
    use diesel::dsl::count;

    debug!("Checking if agent ID {} is referenced", agent_id);

    let order_count: i64 = orders::table
        .filter(orders::agent_id.eq(agent_id))
        .select(count(orders::order_id))
        .first(conn)?;
    if order_count > 0 {
        return Ok(true);
    }

    let commission_count: i64 = commissions::table
        .filter(commissions::agent_id.eq(agent_id))
        .select(count(commissions::commission_id))
        .first(conn)?;
    if commission_count > 0 {
        return Ok(true);
    }

    let visit_count: i64 = link_visits::table
        .filter(link_visits::agent_id.eq(agent_id))
        .select(count(link_visits::visit_id))
        .first(conn)?;

    Ok(visit_count > 0)
}
}
