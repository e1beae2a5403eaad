// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for ticket issuance, lookup, check-in, and serial allocation.

use crate::PersistenceError;
use crate::tests::{create_test_order, create_test_persistence, create_test_ticket};

#[test]
fn test_create_and_get_ticket_by_token() {
    let mut persistence = create_test_persistence();

    let order_id = persistence
        .create_order(&create_test_order("t1", 50_000))
        .unwrap();
    let ticket_id = persistence
        .create_ticket(&create_test_ticket(order_id, "01"))
        .unwrap();
    assert!(ticket_id > 0);

    let found = persistence
        .get_ticket_by_token("tickettoken01")
        .unwrap()
        .unwrap();
    assert_eq!(found.ticket.ticket_id, Some(ticket_id));
    assert_eq!(found.ticket.order_id, order_id);
    assert_eq!(found.order.order_token, "ordertokent1");
    assert!(found.ticket.checked_in_at.is_none());
}

#[test]
fn test_get_ticket_by_qr_token() {
    let mut persistence = create_test_persistence();

    let order_id = persistence
        .create_order(&create_test_order("t2", 50_000))
        .unwrap();
    persistence
        .create_ticket(&create_test_ticket(order_id, "02"))
        .unwrap();

    let ticket = persistence.get_ticket_by_qr_token("qrtoken02").unwrap().unwrap();
    assert_eq!(ticket.order_id, order_id);

    assert!(persistence.get_ticket_by_qr_token("qrtokenzz").unwrap().is_none());
}

#[test]
fn test_get_ticket_by_order() {
    let mut persistence = create_test_persistence();

    let order_id = persistence
        .create_order(&create_test_order("t3", 50_000))
        .unwrap();

    assert!(persistence.get_ticket_by_order(order_id).unwrap().is_none());

    persistence
        .create_ticket(&create_test_ticket(order_id, "03"))
        .unwrap();

    let ticket = persistence.get_ticket_by_order(order_id).unwrap().unwrap();
    assert_eq!(ticket.ticket_number, "EVT2026-000003");
}

#[test]
fn test_one_ticket_per_order() {
    let mut persistence = create_test_persistence();

    let order_id = persistence
        .create_order(&create_test_order("t4", 50_000))
        .unwrap();
    persistence
        .create_ticket(&create_test_ticket(order_id, "04"))
        .unwrap();

    let result = persistence.create_ticket(&create_test_ticket(order_id, "05"));
    assert!(matches!(
        result,
        Err(PersistenceError::UniqueViolation(_))
    ));
}

#[test]
fn test_ticket_requires_existing_order() {
    let mut persistence = create_test_persistence();

    let result = persistence.create_ticket(&create_test_ticket(9999, "06"));
    assert!(result.is_err());
}

#[test]
fn test_list_tickets_newest_first() {
    let mut persistence = create_test_persistence();

    let order_a = persistence
        .create_order(&create_test_order("t5", 50_000))
        .unwrap();
    let order_b = persistence
        .create_order(&create_test_order("t6", 50_000))
        .unwrap();
    persistence
        .create_ticket(&create_test_ticket(order_a, "07"))
        .unwrap();
    persistence
        .create_ticket(&create_test_ticket(order_b, "08"))
        .unwrap();

    let tickets = persistence.list_tickets().unwrap();
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0].ticket.qr_token, "qrtoken08");
    assert_eq!(tickets[1].ticket.qr_token, "qrtoken07");
}

#[test]
fn test_check_in_first_scan_wins() {
    let mut persistence = create_test_persistence();

    let order_id = persistence
        .create_order(&create_test_order("t7", 50_000))
        .unwrap();
    persistence
        .create_ticket(&create_test_ticket(order_id, "09"))
        .unwrap();

    let outcome = persistence
        .check_in_ticket("qrtoken09", "2026-09-01T19:00:00Z")
        .unwrap()
        .unwrap();

    assert!(outcome.first_scan);
    assert_eq!(
        outcome.ticket.checked_in_at.as_deref(),
        Some("2026-09-01T19:00:00Z")
    );
}

#[test]
fn test_check_in_repeat_scan_keeps_original_timestamp() {
    let mut persistence = create_test_persistence();

    let order_id = persistence
        .create_order(&create_test_order("t8", 50_000))
        .unwrap();
    persistence
        .create_ticket(&create_test_ticket(order_id, "10"))
        .unwrap();

    persistence
        .check_in_ticket("qrtoken10", "2026-09-01T19:00:00Z")
        .unwrap();
    let outcome = persistence
        .check_in_ticket("qrtoken10", "2026-09-01T20:30:00Z")
        .unwrap()
        .unwrap();

    assert!(!outcome.first_scan);
    assert_eq!(
        outcome.ticket.checked_in_at.as_deref(),
        Some("2026-09-01T19:00:00Z")
    );
}

#[test]
fn test_check_in_unknown_token_returns_none() {
    let mut persistence = create_test_persistence();

    let outcome = persistence
        .check_in_ticket("qrtokenzz", "2026-09-01T19:00:00Z")
        .unwrap();
    assert!(outcome.is_none());
}

#[test]
fn test_ticket_serials_are_sequential() {
    let mut persistence = create_test_persistence();

    assert_eq!(persistence.next_ticket_number().unwrap(), 1);
    assert_eq!(persistence.next_ticket_number().unwrap(), 2);
    assert_eq!(persistence.next_ticket_number().unwrap(), 3);
}
