// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operation layer for the Gatepass ticketing system.
//!
//! This crate sits between the HTTP server and the persistence layer. It
//! owns the request/response contract, token and code generation, the
//! order lifecycle, referral attribution, ticket issuance, check-in, and
//! the shared-password access gates. Handlers validate input before any
//! write and translate domain and persistence errors into the API error
//! taxonomy.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod codes;
mod config;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::AccessGate;
pub use codes::{human_code, opaque_token, unique_agent_code, unique_reference_code};
pub use config::{AppConfig, ConfigError};
pub use error::{ApiError, translate_domain_error};
pub use handlers::{
    agent_stats, check_in, create_agent, create_order, delete_agent, find_order_by_reference,
    get_order_status, get_ticket, list_agents, list_commissions_admin, list_orders_admin,
    list_tickets_admin, mark_order_failed, mark_order_paid, register_attendee,
    save_payment_details, save_verification_code, update_agent,
};
pub use request_response::{
    AdminOrderInfo, AdminTicketInfo, AgentInfo, AgentStats, CheckinRequest, CheckinResponse,
    CommissionInfo, CreateAgentRequest, CreateOrderRequest, CreateOrderResponse,
    DeleteAgentResponse, MarkFailedResponse, MarkPaidResponse, OrderStatusResponse,
    RegisterAttendeeRequest, RegisterAttendeeResponse, SavePaymentRequest, SavePaymentResponse,
    SaveVerificationCodeRequest, SaveVerificationCodeResponse, TicketResponse, UpdateAgentRequest,
};
