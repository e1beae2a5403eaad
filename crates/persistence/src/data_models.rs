// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Joined read models returned by the persistence layer.
//!
//! Single-entity reads return the domain types directly; reads that
//! attach a relation return one of these wrappers so callers never
//! issue a second lookup.

use gatepass_domain::{Agent, Order, Ticket};

/// An order with its referring agent attached, when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderWithAgent {
    pub order: Order,
    /// The referring agent, or `None` for unattributed orders.
    pub agent: Option<Agent>,
}

/// A ticket with its owning order attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketWithOrder {
    pub ticket: Ticket,
    pub order: Order,
}

/// Result of a mark-paid attempt.
///
/// `transitioned` is true only for the request that won the
/// `PENDING -> PAID` write; repeats observe the already-updated order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaidTransition {
    pub order: Order,
    pub transitioned: bool,
}

/// Result of a mark-failed attempt, mirroring [`PaidTransition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedTransition {
    pub order: Order,
    pub transitioned: bool,
}

/// Result of a check-in attempt.
///
/// `first_scan` is true only for the scan that consumed the ticket;
/// repeat scans carry the original `checked_in_at` on the ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckinOutcome {
    pub ticket: Ticket,
    pub first_scan: bool,
}
