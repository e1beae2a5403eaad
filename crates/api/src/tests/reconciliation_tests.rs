// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for admin reconciliation: mark-paid, mark-failed, commissions,
//! auto-issued tickets, and attendee registration.

use crate::error::ApiError;
use crate::handlers::{
    create_agent, create_order, get_order_status, list_commissions_admin, mark_order_failed,
    mark_order_paid, register_attendee,
};
use crate::request_response::RegisterAttendeeRequest;
use crate::tests::{
    create_agent_request, create_order_request, create_test_config, create_test_persistence,
};

#[test]
fn test_mark_paid_creates_commission_and_ticket() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let agent = create_agent(&mut persistence, &config, &create_agent_request("Sara", 10)).unwrap();
    let order = create_order(
        &mut persistence,
        &config,
        &create_order_request(Some(&agent.code)),
    )
    .unwrap();

    let response = mark_order_paid(&mut persistence, &order.order_token).unwrap();

    assert!(response.transitioned);
    assert!(response.commission_created);
    assert!(response.ticket_issued);
    assert!(response.paid_at.is_some());

    // 50000 at 10% earns exactly 5000
    let commissions = list_commissions_admin(&mut persistence).unwrap();
    assert_eq!(commissions.len(), 1);
    assert_eq!(commissions[0].commission_amount, 5_000);
    assert_eq!(commissions[0].agent_name, "Sara");

    // Auto-issued ticket borrows the agent's name
    let status = get_order_status(&mut persistence, &order.order_token).unwrap();
    assert_eq!(status.status, "PAID");
    assert!(status.ticket_token.is_some());
}

#[test]
fn test_mark_paid_without_agent_creates_no_commission() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let order = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();

    let response = mark_order_paid(&mut persistence, &order.order_token).unwrap();

    assert!(response.transitioned);
    assert!(!response.commission_created);
    assert!(response.ticket_issued);
    assert!(list_commissions_admin(&mut persistence).unwrap().is_empty());
}

#[test]
fn test_repeat_mark_paid_is_a_no_op() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let agent = create_agent(&mut persistence, &config, &create_agent_request("Sara", 10)).unwrap();
    let order = create_order(
        &mut persistence,
        &config,
        &create_order_request(Some(&agent.code)),
    )
    .unwrap();

    let first = mark_order_paid(&mut persistence, &order.order_token).unwrap();
    let second = mark_order_paid(&mut persistence, &order.order_token).unwrap();

    assert!(first.transitioned);
    assert!(!second.transitioned);
    assert!(!second.commission_created);
    assert!(!second.ticket_issued);
    // paid_at survives from the first call
    assert_eq!(second.paid_at, first.paid_at);

    // Still exactly one commission
    assert_eq!(list_commissions_admin(&mut persistence).unwrap().len(), 1);
}

#[test]
fn test_mark_paid_rejected_on_failed_order() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let order = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();
    mark_order_failed(&mut persistence, &order.order_token).unwrap();

    let result = mark_order_paid(&mut persistence, &order.order_token);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "status"
    ));
}

#[test]
fn test_mark_failed_rejected_on_paid_order() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let order = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();
    mark_order_paid(&mut persistence, &order.order_token).unwrap();

    let result = mark_order_failed(&mut persistence, &order.order_token);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "status"
    ));
}

#[test]
fn test_repeat_mark_failed_is_a_no_op() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let order = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();

    let first = mark_order_failed(&mut persistence, &order.order_token).unwrap();
    let second = mark_order_failed(&mut persistence, &order.order_token).unwrap();

    assert!(first.transitioned);
    assert!(!second.transitioned);
}

#[test]
fn test_mark_paid_unknown_token() {
    let mut persistence = create_test_persistence();

    let result = mark_order_paid(&mut persistence, "deadbeef");
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_register_attendee_requires_paid_order() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let order = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();

    let result = register_attendee(
        &mut persistence,
        &order.order_token,
        &RegisterAttendeeRequest {
            attendee_name: String::from("Lina Haddad"),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "status"
    ));
}

#[test]
fn test_register_attendee_is_idempotent() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let order = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();
    mark_order_paid(&mut persistence, &order.order_token).unwrap();

    // Mark-paid already auto-issued; the attendee registration returns
    // that ticket rather than minting another
    let response = register_attendee(
        &mut persistence,
        &order.order_token,
        &RegisterAttendeeRequest {
            attendee_name: String::from("Lina Haddad"),
        },
    )
    .unwrap();

    assert!(response.already_issued);
    assert_eq!(response.attendee_name, "Guest");
}

#[test]
fn test_register_attendee_rejects_short_name() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let order = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();
    mark_order_paid(&mut persistence, &order.order_token).unwrap();

    let result = register_attendee(
        &mut persistence,
        &order.order_token,
        &RegisterAttendeeRequest {
            attendee_name: String::from("Li"),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "attendee_name"
    ));
}
