// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Amounts are integers in Syrian pounds; timestamps are
//! RFC 3339 strings.

/// API request to create a new order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateOrderRequest {
    /// Optional referral code from the agent's shared link.
    pub referral_code: Option<String>,
    /// True when the client has already been counted as a link visit.
    #[serde(default)]
    pub already_counted: bool,
    /// Client IP, recorded with the link visit.
    pub ip_address: Option<String>,
    /// Client user agent, recorded with the link visit.
    pub user_agent: Option<String>,
}

/// API response for a successful order creation.
///
/// Carries everything the payment instructions page needs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateOrderResponse {
    /// The order's opaque token.
    pub order_token: String,
    /// The human-readable reconciliation reference code.
    pub reference_code: String,
    /// The amount due, in Syrian pounds.
    pub amount: i64,
    /// Merchant wallet number for Syriatel Cash transfers.
    pub syriatel_merchant_number: String,
    /// Merchant wallet number for MTN Cash transfers.
    pub mtn_merchant_number: String,
    /// The referring agent's name, when attribution resolved.
    pub agent_name: Option<String>,
}

/// API response describing the current state of an order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OrderStatusResponse {
    /// The order's opaque token.
    pub order_token: String,
    /// The reconciliation reference code.
    pub reference_code: String,
    /// The amount due, in Syrian pounds.
    pub amount: i64,
    /// The order status (`PENDING`, `PAID`, `FAILED`).
    pub status: String,
    /// The chosen payment method, if any.
    pub method: Option<String>,
    /// The buyer's phone number, if provided.
    pub phone: Option<String>,
    /// When the order was marked paid, if it has been.
    pub paid_at: Option<String>,
    /// The referring agent's name, when attribution resolved.
    pub agent_name: Option<String>,
    /// True once the buyer has entered a transfer confirmation code.
    pub verification_code_entered: bool,
    /// The ticket page token, once a ticket has been issued.
    pub ticket_token: Option<String>,
    /// When the order was created.
    pub created_at: String,
}

/// API request to save the buyer's payment method and phone number.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavePaymentRequest {
    /// The payment method (`SYRIATEL` or `MTN`).
    pub method: String,
    /// The wallet phone number the transfer will come from.
    pub phone: String,
}

/// API response for saved payment details.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavePaymentResponse {
    /// The order's opaque token.
    pub order_token: String,
    /// The saved payment method.
    pub method: String,
    /// The saved phone number.
    pub phone: String,
    /// A success message.
    pub message: String,
}

/// API request to save the buyer-entered transfer confirmation code.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SaveVerificationCodeRequest {
    /// The confirmation code, free text.
    pub verification_code: String,
}

/// API response for a saved verification code.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SaveVerificationCodeResponse {
    /// The order's opaque token.
    pub order_token: String,
    /// A success message.
    pub message: String,
}

/// API request to register the attendee and issue the ticket.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterAttendeeRequest {
    /// The name to print on the ticket.
    pub attendee_name: String,
}

/// API response for attendee registration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterAttendeeResponse {
    /// The ticket page token.
    pub ticket_token: String,
    /// The printed ticket number.
    pub ticket_number: String,
    /// The attendee name on the ticket.
    pub attendee_name: String,
    /// True when the order already had a ticket and it was returned as-is.
    pub already_issued: bool,
}

/// API response for the ticket page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TicketResponse {
    /// The printed ticket number.
    pub ticket_number: String,
    /// The ticket page token.
    pub ticket_token: String,
    /// The QR token encoded on the ticket.
    pub qr_token: String,
    /// The attendee name on the ticket.
    pub attendee_name: String,
    /// When the ticket was consumed at the door, if it has been.
    pub checked_in_at: Option<String>,
    /// The owning order's reference code.
    pub order_reference_code: String,
    /// Display name of the event.
    pub event_name: String,
    /// Display date of the event.
    pub event_date: String,
    /// Display location of the event.
    pub event_location: String,
}

/// API request to create a new agent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateAgentRequest {
    /// The agent's display name.
    pub name: String,
    /// The agent's commission percentage (0-100).
    pub commission_percent: i32,
}

/// API request to update an agent's name and commission.
///
/// The referral code is deliberately absent: printed flyers and shared
/// links must keep resolving.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateAgentRequest {
    /// The agent's display name.
    pub name: String,
    /// The agent's commission percentage (0-100).
    pub commission_percent: i32,
}

/// API response describing an agent.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AgentInfo {
    /// The agent's canonical identifier.
    pub agent_id: i64,
    /// The agent's display name.
    pub name: String,
    /// The agent's referral code.
    pub code: String,
    /// The agent's commission percentage.
    pub commission_percent: i32,
    /// The shareable referral link for this agent.
    pub referral_link: String,
    /// When the agent was created.
    pub created_at: String,
}

/// API response for a successful agent deletion.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteAgentResponse {
    /// The deleted agent's identifier.
    pub agent_id: i64,
    /// A success message.
    pub message: String,
}

/// Admin listing row for an order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdminOrderInfo {
    /// The order's canonical identifier.
    pub order_id: i64,
    /// The order's opaque token.
    pub order_token: String,
    /// The reconciliation reference code.
    pub reference_code: String,
    /// The amount due, in Syrian pounds.
    pub amount: i64,
    /// The order status.
    pub status: String,
    /// The chosen payment method, if any.
    pub method: Option<String>,
    /// The buyer's phone number, if provided.
    pub phone: Option<String>,
    /// The buyer-entered transfer confirmation code, if any.
    pub entered_verification_code: Option<String>,
    /// When the order was marked paid, if it has been.
    pub paid_at: Option<String>,
    /// The referring agent's name, when attribution resolved.
    pub agent_name: Option<String>,
    /// When the order was created.
    pub created_at: String,
}

/// Admin listing row for a ticket.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AdminTicketInfo {
    /// The ticket's canonical identifier.
    pub ticket_id: i64,
    /// The printed ticket number.
    pub ticket_number: String,
    /// The attendee name on the ticket.
    pub attendee_name: String,
    /// The ticket page token.
    pub ticket_token: String,
    /// When the ticket was consumed at the door, if it has been.
    pub checked_in_at: Option<String>,
    /// The owning order's reference code.
    pub order_reference_code: String,
    /// The owning order's status.
    pub order_status: String,
    /// When the ticket was issued.
    pub created_at: String,
}

/// Admin listing row for a commission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CommissionInfo {
    /// The commission's canonical identifier.
    pub commission_id: i64,
    /// The earning agent's identifier.
    pub agent_id: i64,
    /// The earning agent's name.
    pub agent_name: String,
    /// The order the commission was earned on.
    pub order_id: i64,
    /// The commission amount, in Syrian pounds.
    pub commission_amount: i64,
    /// The payout status (`PENDING`, `PAID`).
    pub status: String,
    /// When the commission was created.
    pub created_at: String,
}

/// Per-agent performance figures for the admin dashboard.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AgentStats {
    /// The agent's canonical identifier.
    pub agent_id: i64,
    /// The agent's display name.
    pub name: String,
    /// The agent's referral code.
    pub code: String,
    /// The agent's commission percentage.
    pub commission_percent: i32,
    /// Recorded link visits attributed to this agent.
    pub visits: i64,
    /// Orders attributed to this agent.
    pub orders: i64,
    /// Paid orders attributed to this agent.
    pub paid_orders: i64,
    /// Revenue from paid attributed orders, in Syrian pounds.
    pub revenue: i64,
    /// Total commission earned, in Syrian pounds.
    pub commission_total: i64,
    /// `paid_orders / visits` as a percentage, rounded to 2 decimals.
    pub conversion_rate: f64,
}

/// API response for a mark-paid reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MarkPaidResponse {
    /// The order's opaque token.
    pub order_token: String,
    /// The order status after the call (`PAID`).
    pub status: String,
    /// When the order was marked paid.
    pub paid_at: Option<String>,
    /// True when this call performed the transition; false when the
    /// order was already paid.
    pub transitioned: bool,
    /// True when this call created the agent commission.
    pub commission_created: bool,
    /// True when this call auto-issued the ticket.
    pub ticket_issued: bool,
}

/// API response for a mark-failed reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MarkFailedResponse {
    /// The order's opaque token.
    pub order_token: String,
    /// The order status after the call (`FAILED`).
    pub status: String,
    /// True when this call performed the transition; false when the
    /// order was already failed.
    pub transitioned: bool,
}

/// API request to consume a ticket at the door.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckinRequest {
    /// The scanned QR token.
    pub qr_token: String,
}

/// API response for a check-in scan.
///
/// Repeat scans succeed and are distinguished by `already_checked_in`,
/// carrying the original timestamp so the door screen can show when the
/// ticket was first used.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CheckinResponse {
    /// The printed ticket number.
    pub ticket_number: String,
    /// The attendee name on the ticket.
    pub attendee_name: String,
    /// True when the ticket had already been consumed by an earlier scan.
    pub already_checked_in: bool,
    /// When the ticket was consumed (original timestamp on repeat scans).
    pub checked_in_at: Option<String>,
}
