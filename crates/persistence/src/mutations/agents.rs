// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Agent mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gatepass_domain::Agent;
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::diesel_schema::agents;
use crate::error::PersistenceError;
use crate::queries::agents::{is_agent_referenced_mysql, is_agent_referenced_sqlite};

backend_fn! {
/// Creates a new agent.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `agent` - The agent to persist (without an ID)
///
/// # Errors
///
/// Returns `PersistenceError::UniqueViolation` if the referral code is
/// already assigned, or another error if the insert fails.
pub fn create_agent(conn: &mut _, agent: &Agent) -> Result<i64, PersistenceError> {
    info!(
        "Creating agent with name: {}, code: {}, commission: {}%",
        agent.name, agent.code, agent.commission_percent
    );

    diesel::insert_into(agents::table)
        .values((
            agents::name.eq(&agent.name),
            agents::code.eq(&agent.code),
            agents::commission_percent.eq(agent.commission_percent),
            agents::created_at.eq(&agent.created_at),
        ))
        .execute(conn)?;

    let agent_id: i64 = conn.get_last_insert_rowid()?;

    info!(agent_id, "Agent created successfully");

    Ok(agent_id)
}
}

backend_fn! {
/// Updates an agent's name and commission percentage.
///
/// The referral code is immutable: printed flyers and shared links must
/// keep resolving.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `agent_id` - The agent ID
/// * `name` - The new display name
/// * `commission_percent` - The new commission percentage
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the agent does not exist.
pub fn update_agent(
    conn: &mut _,
    agent_id: i64,
    name: &str,
    commission_percent: i32,
) -> Result<(), PersistenceError> {
    info!("Updating agent ID: {}", agent_id);

    let rows_affected: usize = diesel::update(agents::table)
        .filter(agents::agent_id.eq(agent_id))
        .set((
            agents::name.eq(name),
            agents::commission_percent.eq(commission_percent),
        ))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Agent with ID {agent_id} not found"
        )));
    }

    Ok(())
}
}

/// Deletes an agent if nothing references it (`SQLite` version).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `agent_id` - The agent ID
///
/// # Errors
///
/// Returns an error if:
/// - The agent is referenced by orders, commissions, or link visits
/// - The agent does not exist
/// - The database operation fails
pub fn delete_agent_sqlite(
    conn: &mut SqliteConnection,
    agent_id: i64,
) -> Result<(), PersistenceError> {
    info!("Attempting to delete agent ID: {}", agent_id);

    if is_agent_referenced_sqlite(conn, agent_id)? {
        return Err(PersistenceError::AgentReferenced { agent_id });
    }

    let rows_affected: usize = diesel::delete(agents::table)
        .filter(agents::agent_id.eq(agent_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Agent with ID {agent_id} not found"
        )));
    }

    info!("Deleted agent ID: {}", agent_id);
    Ok(())
}

/// Deletes an agent if nothing references it (`MySQL` version).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `agent_id` - The agent ID
///
/// # Errors
///
/// Returns an error if:
/// - The agent is referenced by orders, commissions, or link visits
/// - The agent does not exist
/// - The database operation fails
pub fn delete_agent_mysql(
    conn: &mut MysqlConnection,
    agent_id: i64,
) -> Result<(), PersistenceError> {
    info!("Attempting to delete agent ID: {}", agent_id);

    if is_agent_referenced_mysql(conn, agent_id)? {
        return Err(PersistenceError::AgentReferenced { agent_id });
    }

    let rows_affected: usize = diesel::delete(agents::table)
        .filter(agents::agent_id.eq(agent_id))
        .execute(conn)?;

    if rows_affected == 0 {
        return Err(PersistenceError::NotFound(format!(
            "Agent with ID {agent_id} not found"
        )));
    }

    info!("Deleted agent ID: {}", agent_id);
    Ok(())
}
