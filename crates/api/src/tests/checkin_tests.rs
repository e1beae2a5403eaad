// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the door check-in flow.

use crate::error::ApiError;
use crate::handlers::{create_order, get_order_status, get_ticket, mark_order_paid, check_in};
use crate::request_response::CheckinRequest;
use crate::tests::{create_order_request, create_test_config, create_test_persistence};
use gatepass_persistence::Persistence;

fn paid_order_qr_token(persistence: &mut Persistence) -> String {
    let config = create_test_config();
    let order = create_order(persistence, &config, &create_order_request(None)).unwrap();
    mark_order_paid(persistence, &order.order_token).unwrap();

    let status = get_order_status(persistence, &order.order_token).unwrap();
    let ticket = get_ticket(persistence, &config, &status.ticket_token.unwrap()).unwrap();
    ticket.qr_token
}

#[test]
fn test_first_scan_checks_in() {
    let mut persistence = create_test_persistence();
    let qr_token = paid_order_qr_token(&mut persistence);

    let response = check_in(&mut persistence, &CheckinRequest { qr_token }).unwrap();

    assert!(!response.already_checked_in);
    assert!(response.checked_in_at.is_some());
}

#[test]
fn test_repeat_scan_reports_already_checked_in() {
    let mut persistence = create_test_persistence();
    let qr_token = paid_order_qr_token(&mut persistence);

    let first = check_in(
        &mut persistence,
        &CheckinRequest {
            qr_token: qr_token.clone(),
        },
    )
    .unwrap();
    let second = check_in(&mut persistence, &CheckinRequest { qr_token }).unwrap();

    assert!(second.already_checked_in);
    // Identical identity and original timestamp on the repeat scan
    assert_eq!(second.ticket_number, first.ticket_number);
    assert_eq!(second.attendee_name, first.attendee_name);
    assert_eq!(second.checked_in_at, first.checked_in_at);
}

#[test]
fn test_unknown_qr_token_is_not_found() {
    let mut persistence = create_test_persistence();

    let result = check_in(
        &mut persistence,
        &CheckinRequest {
            qr_token: String::from("deadbeefdeadbeef"),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_short_qr_token_is_rejected_before_lookup() {
    let mut persistence = create_test_persistence();

    let result = check_in(
        &mut persistence,
        &CheckinRequest {
            qr_token: String::from("abc"),
        },
    );
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "qr_token"
    ));
}
