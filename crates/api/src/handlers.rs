// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for the buyer, admin, and check-in surfaces.
//!
//! Handlers validate input before any write, orchestrate persistence
//! calls, and translate domain and persistence errors into the API
//! error taxonomy. They hold no state of their own; everything flows
//! through the persistence adapter and the startup configuration.

use std::collections::HashMap;
use std::str::FromStr;

use tracing::{debug, info, warn};

use gatepass_domain::{
    Agent, Commission, DomainError, LinkVisit, Order, OrderStatus, PaymentMethod, Ticket,
    commission_amount, conversion_rate, format_ticket_number, normalize_verification_code,
    now_timestamp, validate_agent_name, validate_attendee_name, validate_checkin_token,
    validate_amount, validate_commission_percent, validate_phone,
};
use gatepass_persistence::{OrderWithAgent, Persistence, TicketWithOrder};

use crate::codes::{
    ORDER_TOKEN_BYTES, QR_TOKEN_BYTES, opaque_token, unique_agent_code, unique_reference_code,
};
use crate::config::AppConfig;
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{
    AdminOrderInfo, AdminTicketInfo, AgentInfo, AgentStats, CheckinRequest, CheckinResponse,
    CommissionInfo, CreateAgentRequest, CreateOrderRequest, CreateOrderResponse,
    DeleteAgentResponse, MarkFailedResponse, MarkPaidResponse, OrderStatusResponse,
    RegisterAttendeeRequest, RegisterAttendeeResponse, SavePaymentRequest, SavePaymentResponse,
    SaveVerificationCodeRequest, SaveVerificationCodeResponse, TicketResponse, UpdateAgentRequest,
};

/// Attendee name placed on auto-issued tickets when the order has no
/// referring agent to borrow a name from.
const FALLBACK_ATTENDEE_NAME: &str = "Guest";

/// Unwraps a canonical ID that persistence is expected to have populated.
fn require_id(id: Option<i64>, what: &str) -> Result<i64, ApiError> {
    id.ok_or_else(|| ApiError::Internal {
        message: format!("Persisted {what} is missing its canonical ID"),
    })
}

fn order_not_found(detail: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Order"),
        message: format!("No order matches {detail}"),
    }
}

// ============================================================================
// Referral attribution
// ============================================================================

/// Resolves a referral code to an agent.
///
/// Unknown or empty codes resolve to `None`; the order proceeds
/// unattributed. A buyer must never lose a purchase to a stale flyer.
fn resolve_referral(
    persistence: &mut Persistence,
    code: Option<&str>,
) -> Result<Option<Agent>, ApiError> {
    let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
        return Ok(None);
    };

    let agent: Option<Agent> = persistence.get_agent_by_code(code)?;
    if agent.is_none() {
        debug!("Referral code '{}' did not resolve to an agent", code);
    }
    Ok(agent)
}

/// Records a referral link visit, best-effort.
///
/// Visit tracking is bookkeeping for the conversion rate; a failure here
/// is logged and never blocks the purchase.
fn record_visit_best_effort(
    persistence: &mut Persistence,
    code: &str,
    agent: Option<&Agent>,
    request: &CreateOrderRequest,
) {
    let visit = LinkVisit::new(
        String::from(code),
        agent.and_then(|a| a.agent_id),
        request.ip_address.clone(),
        request.user_agent.clone(),
    );

    if let Err(e) = persistence.record_visit(&visit) {
        warn!("Failed to record link visit for code '{}': {}", code, e);
    }
}

// ============================================================================
// Buyer surface
// ============================================================================

/// Creates a new pending order at the configured ticket price.
///
/// Resolves referral attribution (tolerantly), records the link visit
/// unless the caller was already counted, and returns the payment
/// instructions payload.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the configured ticket price is not
/// positive, `ApiError::CodeSpaceExhausted` if no unique reference code
/// could be generated, or an error if persistence fails.
pub fn create_order(
    persistence: &mut Persistence,
    config: &AppConfig,
    request: &CreateOrderRequest,
) -> Result<CreateOrderResponse, ApiError> {
    validate_amount(config.ticket_price_syp).map_err(|e| translate_domain_error(&e))?;

    let agent: Option<Agent> = resolve_referral(persistence, request.referral_code.as_deref())?;

    if let Some(code) = request
        .referral_code
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        if request.already_counted {
            debug!("Skipping visit record for code '{}': already counted", code);
        } else {
            record_visit_best_effort(persistence, code, agent.as_ref(), request);
        }
    }

    let order_token: String = opaque_token(ORDER_TOKEN_BYTES);
    let reference_code: String = unique_reference_code(persistence)?;

    let mut order = Order::new(
        order_token.clone(),
        config.ticket_price_syp,
        reference_code.clone(),
    );
    if let Some(agent_id) = agent.as_ref().and_then(|a| a.agent_id) {
        order = order.with_agent(agent_id);
    }

    persistence.create_order(&order)?;

    info!(
        "Created order {} for {} SYP (agent: {})",
        reference_code,
        order.amount,
        agent.as_ref().map_or("none", |a| a.name.as_str())
    );

    Ok(CreateOrderResponse {
        order_token,
        reference_code,
        amount: order.amount,
        syriatel_merchant_number: config.syriatel_merchant_number.clone(),
        mtn_merchant_number: config.mtn_merchant_number.clone(),
        agent_name: agent.map(|a| a.name),
    })
}

fn order_status_response(
    persistence: &mut Persistence,
    found: OrderWithAgent,
) -> Result<OrderStatusResponse, ApiError> {
    let order_id: i64 = require_id(found.order.order_id, "order")?;
    let ticket: Option<Ticket> = persistence.get_ticket_by_order(order_id)?;

    Ok(OrderStatusResponse {
        order_token: found.order.order_token,
        reference_code: found.order.reference_code,
        amount: found.order.amount,
        status: String::from(found.order.status.as_str()),
        method: found.order.method.map(|m| String::from(m.as_str())),
        phone: found.order.phone,
        paid_at: found.order.paid_at,
        agent_name: found.agent.map(|a| a.name),
        verification_code_entered: found.order.entered_verification_code.is_some(),
        ticket_token: ticket.map(|t| t.ticket_token),
        created_at: found.order.created_at,
    })
}

/// Returns the status poll payload for an order token.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no order has the token.
pub fn get_order_status(
    persistence: &mut Persistence,
    order_token: &str,
) -> Result<OrderStatusResponse, ApiError> {
    let found: OrderWithAgent = persistence
        .get_order_by_token(order_token)?
        .ok_or_else(|| order_not_found("that token"))?;

    order_status_response(persistence, found)
}

/// Looks up an order by its reconciliation reference code.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no order has the code.
pub fn find_order_by_reference(
    persistence: &mut Persistence,
    reference_code: &str,
) -> Result<OrderStatusResponse, ApiError> {
    let found: OrderWithAgent = persistence
        .get_order_by_reference_code(reference_code.trim())?
        .ok_or_else(|| order_not_found("that reference code"))?;

    order_status_response(persistence, found)
}

/// Saves the buyer's payment method and wallet phone number.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the method or phone is invalid,
/// or `ApiError::ResourceNotFound` if no order has the token.
pub fn save_payment_details(
    persistence: &mut Persistence,
    order_token: &str,
    request: &SavePaymentRequest,
) -> Result<SavePaymentResponse, ApiError> {
    let method: PaymentMethod =
        PaymentMethod::from_str(&request.method).map_err(|e| translate_domain_error(&e))?;
    validate_phone(&request.phone).map_err(|e| translate_domain_error(&e))?;
    let phone: &str = request.phone.trim();

    persistence.set_payment_details(order_token, method, phone)?;

    info!("Saved {} payment details for order token", method);

    Ok(SavePaymentResponse {
        order_token: String::from(order_token),
        method: String::from(method.as_str()),
        phone: String::from(phone),
        message: String::from("Payment details saved"),
    })
}

/// Saves the buyer-entered transfer confirmation code.
///
/// The code is free text, trimmed and truncated rather than rejected.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the code is empty after
/// trimming, or `ApiError::ResourceNotFound` if no order has the token.
pub fn save_verification_code(
    persistence: &mut Persistence,
    order_token: &str,
    request: &SaveVerificationCodeRequest,
) -> Result<SaveVerificationCodeResponse, ApiError> {
    let code: String = normalize_verification_code(&request.verification_code);
    if code.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("verification_code"),
            message: String::from("Verification code must not be empty"),
        });
    }

    persistence.save_verification_code(order_token, &code)?;

    Ok(SaveVerificationCodeResponse {
        order_token: String::from(order_token),
        message: String::from("Verification code saved"),
    })
}

/// Issues a ticket for an order, riding out a concurrent issuance.
///
/// If the insert loses the unique `order_id` race the winner's ticket is
/// returned instead. The boolean reports whether this call issued it.
fn issue_ticket(
    persistence: &mut Persistence,
    order_id: i64,
    attendee_name: &str,
) -> Result<(Ticket, bool), ApiError> {
    let serial: i64 = persistence.next_ticket_number()?;
    let ticket = Ticket::new(
        order_id,
        String::from(attendee_name),
        format_ticket_number(serial),
        opaque_token(ORDER_TOKEN_BYTES),
        opaque_token(QR_TOKEN_BYTES),
    );

    match persistence.create_ticket(&ticket) {
        Ok(_) => {
            info!("Issued ticket {} for order ID {}", ticket.ticket_number, order_id);
            Ok((ticket, true))
        }
        Err(gatepass_persistence::PersistenceError::UniqueViolation(_)) => {
            let existing: Ticket = persistence
                .get_ticket_by_order(order_id)?
                .ok_or_else(|| ApiError::Internal {
                    message: format!(
                        "Ticket insert for order {order_id} collided but no ticket exists"
                    ),
                })?;
            Ok((existing, false))
        }
        Err(e) => Err(e.into()),
    }
}

/// Registers the attendee for a paid order and issues the ticket.
///
/// Idempotent: an order that already has a ticket gets that ticket back
/// unchanged, whatever name was submitted.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the name is invalid or the order
/// is not paid, or `ApiError::ResourceNotFound` if no order has the
/// token.
pub fn register_attendee(
    persistence: &mut Persistence,
    order_token: &str,
    request: &RegisterAttendeeRequest,
) -> Result<RegisterAttendeeResponse, ApiError> {
    validate_attendee_name(&request.attendee_name).map_err(|e| translate_domain_error(&e))?;
    let attendee_name: &str = request.attendee_name.trim();

    let found: OrderWithAgent = persistence
        .get_order_by_token(order_token)?
        .ok_or_else(|| order_not_found("that token"))?;

    if found.order.status != OrderStatus::Paid {
        return Err(ApiError::InvalidInput {
            field: String::from("status"),
            message: format!(
                "Tickets are issued for paid orders only; this order is {}",
                found.order.status
            ),
        });
    }

    let order_id: i64 = require_id(found.order.order_id, "order")?;

    if let Some(existing) = persistence.get_ticket_by_order(order_id)? {
        return Ok(RegisterAttendeeResponse {
            ticket_token: existing.ticket_token,
            ticket_number: existing.ticket_number,
            attendee_name: existing.attendee_name,
            already_issued: true,
        });
    }

    let (ticket, issued_now) = issue_ticket(persistence, order_id, attendee_name)?;

    Ok(RegisterAttendeeResponse {
        ticket_token: ticket.ticket_token,
        ticket_number: ticket.ticket_number,
        attendee_name: ticket.attendee_name,
        already_issued: !issued_now,
    })
}

/// Returns the ticket page payload.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no ticket has the token.
pub fn get_ticket(
    persistence: &mut Persistence,
    config: &AppConfig,
    ticket_token: &str,
) -> Result<TicketResponse, ApiError> {
    let found: TicketWithOrder = persistence.get_ticket_by_token(ticket_token)?.ok_or_else(|| {
        ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message: String::from("No ticket matches that token"),
        }
    })?;

    Ok(TicketResponse {
        ticket_number: found.ticket.ticket_number,
        ticket_token: found.ticket.ticket_token,
        qr_token: found.ticket.qr_token,
        attendee_name: found.ticket.attendee_name,
        checked_in_at: found.ticket.checked_in_at,
        order_reference_code: found.order.reference_code,
        event_name: config.event_name.clone(),
        event_date: config.event_date.clone(),
        event_location: config.event_location.clone(),
    })
}

// ============================================================================
// Admin surface — agents
// ============================================================================

fn agent_info(config: &AppConfig, agent: Agent) -> Result<AgentInfo, ApiError> {
    let agent_id: i64 = require_id(agent.agent_id, "agent")?;
    Ok(AgentInfo {
        agent_id,
        referral_link: config.referral_link(&agent.code),
        name: agent.name,
        code: agent.code,
        commission_percent: agent.commission_percent,
        created_at: agent.created_at,
    })
}

/// Creates a new agent with a freshly generated referral code.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` on validation failure,
/// `ApiError::CodeSpaceExhausted` if no unique code could be generated,
/// or an error if persistence fails.
pub fn create_agent(
    persistence: &mut Persistence,
    config: &AppConfig,
    request: &CreateAgentRequest,
) -> Result<AgentInfo, ApiError> {
    let name: &str = request.name.trim();
    validate_agent_name(name).map_err(|e| translate_domain_error(&e))?;
    validate_commission_percent(request.commission_percent)
        .map_err(|e| translate_domain_error(&e))?;

    let code: String = unique_agent_code(persistence)?;
    let agent = Agent::new(String::from(name), code, request.commission_percent);
    let agent_id: i64 = persistence.create_agent(&agent)?;

    info!(
        "Created agent '{}' with code {} at {}%",
        agent.name, agent.code, agent.commission_percent
    );

    agent_info(
        config,
        Agent::with_id(
            agent_id,
            agent.name,
            agent.code,
            agent.commission_percent,
            agent.created_at,
        ),
    )
}

/// Lists all agents with their referral links.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_agents(
    persistence: &mut Persistence,
    config: &AppConfig,
) -> Result<Vec<AgentInfo>, ApiError> {
    persistence
        .list_agents()?
        .into_iter()
        .map(|agent| agent_info(config, agent))
        .collect()
}

/// Updates an agent's name and commission percentage.
///
/// The referral code never changes; printed flyers and shared links
/// must keep resolving.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` on validation failure or
/// `ApiError::ResourceNotFound` if the agent does not exist.
pub fn update_agent(
    persistence: &mut Persistence,
    config: &AppConfig,
    agent_id: i64,
    request: &UpdateAgentRequest,
) -> Result<AgentInfo, ApiError> {
    let name: &str = request.name.trim();
    validate_agent_name(name).map_err(|e| translate_domain_error(&e))?;
    validate_commission_percent(request.commission_percent)
        .map_err(|e| translate_domain_error(&e))?;

    persistence.update_agent(agent_id, name, request.commission_percent)?;

    let agent: Agent =
        persistence
            .get_agent_by_id(agent_id)?
            .ok_or_else(|| ApiError::ResourceNotFound {
                resource_type: String::from("Agent"),
                message: format!("No agent with ID {agent_id}"),
            })?;

    agent_info(config, agent)
}

/// Deletes an agent with no recorded history.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the agent is referenced by
/// orders, commissions, or visits, or `ApiError::ResourceNotFound` if
/// it does not exist.
pub fn delete_agent(
    persistence: &mut Persistence,
    agent_id: i64,
) -> Result<DeleteAgentResponse, ApiError> {
    persistence.delete_agent(agent_id)?;

    info!("Deleted agent ID {}", agent_id);

    Ok(DeleteAgentResponse {
        agent_id,
        message: String::from("Agent deleted"),
    })
}

// ============================================================================
// Admin surface — listings and stats
// ============================================================================

/// Lists all orders for the reconciliation dashboard, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_orders_admin(persistence: &mut Persistence) -> Result<Vec<AdminOrderInfo>, ApiError> {
    persistence
        .list_orders()?
        .into_iter()
        .map(|found| {
            Ok(AdminOrderInfo {
                order_id: require_id(found.order.order_id, "order")?,
                order_token: found.order.order_token,
                reference_code: found.order.reference_code,
                amount: found.order.amount,
                status: String::from(found.order.status.as_str()),
                method: found.order.method.map(|m| String::from(m.as_str())),
                phone: found.order.phone,
                entered_verification_code: found.order.entered_verification_code,
                paid_at: found.order.paid_at,
                agent_name: found.agent.map(|a| a.name),
                created_at: found.order.created_at,
            })
        })
        .collect()
}

/// Lists all tickets for the admin dashboard, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_tickets_admin(persistence: &mut Persistence) -> Result<Vec<AdminTicketInfo>, ApiError> {
    persistence
        .list_tickets()?
        .into_iter()
        .map(|found| {
            Ok(AdminTicketInfo {
                ticket_id: require_id(found.ticket.ticket_id, "ticket")?,
                ticket_number: found.ticket.ticket_number,
                attendee_name: found.ticket.attendee_name,
                ticket_token: found.ticket.ticket_token,
                checked_in_at: found.ticket.checked_in_at,
                order_reference_code: found.order.reference_code,
                order_status: String::from(found.order.status.as_str()),
                created_at: found.ticket.created_at,
            })
        })
        .collect()
}

/// Lists all commissions with agent names, newest first.
///
/// # Errors
///
/// Returns an error if a query fails.
pub fn list_commissions_admin(
    persistence: &mut Persistence,
) -> Result<Vec<CommissionInfo>, ApiError> {
    let names: HashMap<i64, String> = persistence
        .list_agents()?
        .into_iter()
        .filter_map(|a| a.agent_id.map(|id| (id, a.name)))
        .collect();

    persistence
        .list_commissions()?
        .into_iter()
        .map(|commission| {
            Ok(CommissionInfo {
                commission_id: require_id(commission.commission_id, "commission")?,
                agent_id: commission.agent_id,
                agent_name: names
                    .get(&commission.agent_id)
                    .cloned()
                    .unwrap_or_default(),
                order_id: commission.order_id,
                commission_amount: commission.commission_amount,
                status: String::from(commission.status.as_str()),
                created_at: commission.created_at,
            })
        })
        .collect()
}

/// Computes per-agent performance figures for the admin dashboard.
///
/// # Errors
///
/// Returns an error if a query fails.
pub fn agent_stats(persistence: &mut Persistence) -> Result<Vec<AgentStats>, ApiError> {
    let agents: Vec<Agent> = persistence.list_agents()?;
    let orders: Vec<OrderWithAgent> = persistence.list_orders()?;

    let mut stats: Vec<AgentStats> = Vec::with_capacity(agents.len());
    for agent in agents {
        let agent_id: i64 = require_id(agent.agent_id, "agent")?;
        let visits: i64 = persistence.count_visits_for_agent(agent_id)?;

        let mut order_count: i64 = 0;
        let mut paid_count: i64 = 0;
        let mut revenue: i64 = 0;
        for found in orders
            .iter()
            .filter(|found| found.order.agent_id == Some(agent_id))
        {
            order_count += 1;
            if found.order.status == OrderStatus::Paid {
                paid_count += 1;
                revenue += found.order.amount;
            }
        }

        let commission_total: i64 = persistence
            .list_commissions_for_agent(agent_id)?
            .iter()
            .map(|c| c.commission_amount)
            .sum();

        stats.push(AgentStats {
            agent_id,
            name: agent.name,
            code: agent.code,
            commission_percent: agent.commission_percent,
            visits,
            orders: order_count,
            paid_orders: paid_count,
            revenue,
            commission_total,
            conversion_rate: conversion_rate(paid_count, visits),
        });
    }

    Ok(stats)
}

// ============================================================================
// Admin surface — reconciliation
// ============================================================================

/// Marks an order paid after the admin has verified the wallet transfer.
///
/// On the winning transition the agent commission is created at most
/// once and a ticket is auto-issued if none exists. A repeat mark-paid
/// is a no-op; marking a failed order paid is rejected.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no order has the token, or
/// `ApiError::InvalidInput` if the order already failed.
pub fn mark_order_paid(
    persistence: &mut Persistence,
    order_token: &str,
) -> Result<MarkPaidResponse, ApiError> {
    let paid_at: String = now_timestamp();
    let transition = persistence.mark_order_paid(order_token, &paid_at)?;

    if !transition.transitioned {
        return match transition.order.status {
            OrderStatus::Paid => {
                debug!("Order {} already paid; mark-paid is a no-op", order_token);
                Ok(MarkPaidResponse {
                    order_token: String::from(order_token),
                    status: String::from(OrderStatus::Paid.as_str()),
                    paid_at: transition.order.paid_at,
                    transitioned: false,
                    commission_created: false,
                    ticket_issued: false,
                })
            }
            other => Err(translate_domain_error(&DomainError::InvalidStatusTransition {
                from: String::from(other.as_str()),
                to: String::from(OrderStatus::Paid.as_str()),
            })),
        };
    }

    let order: Order = transition.order;
    let order_id: i64 = require_id(order.order_id, "order")?;

    info!("Marked order {} paid", order.reference_code);

    let mut agent: Option<Agent> = None;
    let mut commission_created: bool = false;
    if let Some(agent_id) = order.agent_id {
        agent = persistence.get_agent_by_id(agent_id)?;
        if let Some(ref earning_agent) = agent {
            let earned: i64 = commission_amount(order.amount, earning_agent.commission_percent);
            let commission = Commission::new(agent_id, order_id, earned);
            commission_created = persistence.create_commission_if_absent(&commission)?;
        }
    }

    // Bulk reconciliation: the buyer may never return to name the
    // attendee, so issue the ticket now if none exists.
    let mut ticket_issued: bool = false;
    if persistence.get_ticket_by_order(order_id)?.is_none() {
        let attendee_name: &str = agent
            .as_ref()
            .map_or(FALLBACK_ATTENDEE_NAME, |a| a.name.as_str());
        match issue_ticket(persistence, order_id, attendee_name) {
            Ok((_, issued_now)) => ticket_issued = issued_now,
            Err(e) => {
                warn!(
                    "Ticket issuance failed during mark-paid of {}: {}",
                    order.reference_code, e
                );
            }
        }
    }

    Ok(MarkPaidResponse {
        order_token: String::from(order_token),
        status: String::from(OrderStatus::Paid.as_str()),
        paid_at: Some(paid_at),
        transitioned: true,
        commission_created,
        ticket_issued,
    })
}

/// Marks an order failed after reconciliation found no transfer.
///
/// A repeat mark-failed is a no-op; marking a paid order failed is
/// rejected.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no order has the token, or
/// `ApiError::InvalidInput` if the order is already paid.
pub fn mark_order_failed(
    persistence: &mut Persistence,
    order_token: &str,
) -> Result<MarkFailedResponse, ApiError> {
    let transition = persistence.mark_order_failed(order_token)?;

    if !transition.transitioned {
        return match transition.order.status {
            OrderStatus::Failed => Ok(MarkFailedResponse {
                order_token: String::from(order_token),
                status: String::from(OrderStatus::Failed.as_str()),
                transitioned: false,
            }),
            other => Err(translate_domain_error(&DomainError::InvalidStatusTransition {
                from: String::from(other.as_str()),
                to: String::from(OrderStatus::Failed.as_str()),
            })),
        };
    }

    info!("Marked order {} failed", transition.order.reference_code);

    Ok(MarkFailedResponse {
        order_token: String::from(order_token),
        status: String::from(OrderStatus::Failed.as_str()),
        transitioned: true,
    })
}

// ============================================================================
// Check-in surface
// ============================================================================

/// Consumes a ticket at the door.
///
/// The first scan checks the ticket in; repeat scans succeed with
/// `already_checked_in` set and the original timestamp, so the door
/// screen can show when the ticket was first used.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the token is malformed, or
/// `ApiError::ResourceNotFound` if no ticket has the token.
pub fn check_in(
    persistence: &mut Persistence,
    request: &CheckinRequest,
) -> Result<CheckinResponse, ApiError> {
    validate_checkin_token(&request.qr_token).map_err(|e| translate_domain_error(&e))?;
    let qr_token: &str = request.qr_token.trim();

    let outcome = persistence
        .check_in_ticket(qr_token, &now_timestamp())?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message: String::from("No ticket matches that QR token"),
        })?;

    Ok(CheckinResponse {
        ticket_number: outcome.ticket.ticket_number,
        attendee_name: outcome.ticket.attendee_name,
        already_checked_in: !outcome.first_scan,
        checked_in_at: outcome.ticket.checked_in_at,
    })
}
