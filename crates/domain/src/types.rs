// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::status::{CommissionStatus, OrderStatus, PaymentMethod};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Returns the current UTC time as an RFC 3339 string.
///
/// All entity timestamps are stored as text in this format so that
/// `SQLite` and MySQL rows compare and sort identically.
#[must_use]
pub fn now_timestamp() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("1970-01-01T00:00:00Z"))
}

/// A sales agent who refers buyers via a shareable code.
///
/// Agents earn a percentage commission on each paid order attributed
/// to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the agent has not been persisted yet.
    pub agent_id: Option<i64>,
    /// Display name, 2-100 characters.
    pub name: String,
    /// Shareable referral code, 8 characters from the human-safe alphabet.
    pub code: String,
    /// Commission percentage, 0-100 inclusive.
    pub commission_percent: i32,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl Agent {
    /// Creates a new `Agent` without a persisted ID.
    #[must_use]
    pub fn new(name: String, code: String, commission_percent: i32) -> Self {
        Self {
            agent_id: None,
            name,
            code,
            commission_percent,
            created_at: now_timestamp(),
        }
    }

    /// Creates an `Agent` with an existing persisted ID.
    #[must_use]
    pub const fn with_id(
        agent_id: i64,
        name: String,
        code: String,
        commission_percent: i32,
        created_at: String,
    ) -> Self {
        Self {
            agent_id: Some(agent_id),
            name,
            code,
            commission_percent,
            created_at,
        }
    }
}

/// A purchase attempt for one ticket.
///
/// The `order_token` is the buyer's private handle; the
/// `reference_code` is the short code quoted in the wallet transfer so
/// an admin can reconcile the payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the order has not been persisted yet.
    pub order_id: Option<i64>,
    /// Opaque buyer-facing handle (36 hex characters).
    pub order_token: String,
    /// Price in Syrian pounds, fixed at creation time.
    pub amount: i64,
    /// Selected payment method, if the buyer has reached that step.
    pub method: Option<PaymentMethod>,
    /// Buyer phone number used for the wallet transfer.
    pub phone: Option<String>,
    /// Short reconciliation code (`EVT-` plus 5 characters).
    pub reference_code: String,
    /// Current payment status.
    pub status: OrderStatus,
    /// When the order was marked paid (RFC 3339). Never cleared.
    pub paid_at: Option<String>,
    /// Referring agent, if the buyer arrived via a referral link.
    pub agent_id: Option<i64>,
    /// Transfer confirmation code entered by the buyer.
    pub entered_verification_code: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl Order {
    /// Creates a new pending `Order` without a persisted ID.
    #[must_use]
    pub fn new(order_token: String, amount: i64, reference_code: String) -> Self {
        Self {
            order_id: None,
            order_token,
            amount,
            method: None,
            phone: None,
            reference_code,
            status: OrderStatus::Pending,
            paid_at: None,
            agent_id: None,
            entered_verification_code: None,
            created_at: now_timestamp(),
        }
    }

    /// Attaches a referring agent to an unpersisted order.
    #[must_use]
    pub const fn with_agent(mut self, agent_id: i64) -> Self {
        self.agent_id = Some(agent_id);
        self
    }
}

/// An issued ticket for a paid order.
///
/// The `ticket_token` addresses the ticket page; the `qr_token` is the
/// value embedded in the QR code and consumed at the door.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the ticket has not been persisted yet.
    pub ticket_id: Option<i64>,
    /// The paid order this ticket belongs to. One ticket per order.
    pub order_id: i64,
    /// Name presented at check-in, 3-120 characters.
    pub attendee_name: String,
    /// Human-readable serial, strictly increasing across the event.
    pub ticket_number: String,
    /// Opaque handle for the ticket page (36 hex characters).
    pub ticket_token: String,
    /// Opaque value embedded in the QR code (32 hex characters).
    pub qr_token: String,
    /// When the ticket was scanned at the door (RFC 3339). Set once.
    pub checked_in_at: Option<String>,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl Ticket {
    /// Creates a new `Ticket` without a persisted ID.
    #[must_use]
    pub fn new(
        order_id: i64,
        attendee_name: String,
        ticket_number: String,
        ticket_token: String,
        qr_token: String,
    ) -> Self {
        Self {
            ticket_id: None,
            order_id,
            attendee_name,
            ticket_number,
            ticket_token,
            qr_token,
            checked_in_at: None,
            created_at: now_timestamp(),
        }
    }
}

/// An agent's earned commission for one paid order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the commission has not been persisted yet.
    pub commission_id: Option<i64>,
    /// The agent owed this commission.
    pub agent_id: i64,
    /// The paid order that earned it. At most one commission per order.
    pub order_id: i64,
    /// Commission in Syrian pounds, rounded half-up from the order
    /// amount at the agent's percentage.
    pub commission_amount: i64,
    /// Payout status.
    pub status: CommissionStatus,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

impl Commission {
    /// Creates a new pending `Commission` without a persisted ID.
    #[must_use]
    pub fn new(agent_id: i64, order_id: i64, commission_amount: i64) -> Self {
        Self {
            commission_id: None,
            agent_id,
            order_id,
            commission_amount,
            status: CommissionStatus::Pending,
            created_at: now_timestamp(),
        }
    }
}

/// One recorded visit to an agent's referral link.
///
/// Visits are append-only and feed the per-agent conversion rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkVisit {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the visit has not been persisted yet.
    pub visit_id: Option<i64>,
    /// The referral code as presented, whether or not it resolved.
    pub agent_code: String,
    /// The resolved agent, when the code matched one.
    pub agent_id: Option<i64>,
    /// Visit timestamp (RFC 3339).
    pub visited_at: String,
    /// Caller IP, when known.
    pub ip_address: Option<String>,
    /// Caller user agent, when known.
    pub user_agent: Option<String>,
}

impl LinkVisit {
    /// Creates a new `LinkVisit` without a persisted ID.
    #[must_use]
    pub fn new(
        agent_code: String,
        agent_id: Option<i64>,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            visit_id: None,
            agent_code,
            agent_id,
            visited_at: now_timestamp(),
            ip_address,
            user_agent,
        }
    }
}
