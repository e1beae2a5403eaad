// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Commission mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gatepass_domain::Commission;
use tracing::info;

use crate::diesel_schema::commissions;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a commission unless one already exists for the order.
///
/// Uses insert-or-ignore against the unique `order_id` column, so two
/// concurrent mark-paid calls cannot both create a commission. Returns
/// true if this call inserted the row.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `commission` - The commission to persist (without an ID)
///
/// # Errors
///
/// Returns an error if the insert fails for a reason other than an
/// existing commission.
pub fn create_commission_if_absent(
    conn: &mut _,
    commission: &Commission,
) -> Result<bool, PersistenceError> {
    let rows_affected: usize = diesel::insert_or_ignore_into(commissions::table)
        .values((
            commissions::agent_id.eq(commission.agent_id),
            commissions::order_id.eq(commission.order_id),
            commissions::commission_amount.eq(commission.commission_amount),
            commissions::status.eq(commission.status.as_str()),
            commissions::created_at.eq(&commission.created_at),
        ))
        .execute(conn)?;

    if rows_affected > 0 {
        info!(
            "Created commission of {} for agent ID {} on order ID {}",
            commission.commission_amount, commission.agent_id, commission.order_id
        );
    }

    Ok(rows_affected > 0)
}
}
