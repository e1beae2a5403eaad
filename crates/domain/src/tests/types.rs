// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Agent, Commission, LinkVisit, Order, OrderStatus, Ticket};

#[test]
fn test_new_agent_has_no_id() {
    let agent = Agent::new(String::from("Amal"), String::from("ABCDEFGH"), 10);
    assert_eq!(agent.agent_id, None);
    assert_eq!(agent.commission_percent, 10);
    assert!(!agent.created_at.is_empty());
}

#[test]
fn test_agent_with_id_round_trips_fields() {
    let agent = Agent::with_id(
        7,
        String::from("Amal"),
        String::from("ABCDEFGH"),
        10,
        String::from("2026-01-01T00:00:00Z"),
    );
    assert_eq!(agent.agent_id, Some(7));
    assert_eq!(agent.created_at, "2026-01-01T00:00:00Z");
}

#[test]
fn test_new_order_is_pending_and_unattributed() {
    let order = Order::new(String::from("deadbeef"), 50000, String::from("EVT-ABCDE"));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.agent_id, None);
    assert_eq!(order.paid_at, None);
    assert_eq!(order.method, None);
    assert_eq!(order.amount, 50000);
}

#[test]
fn test_order_with_agent_sets_attribution() {
    let order = Order::new(String::from("deadbeef"), 50000, String::from("EVT-ABCDE"))
        .with_agent(3);
    assert_eq!(order.agent_id, Some(3));
}

#[test]
fn test_new_ticket_is_not_checked_in() {
    let ticket = Ticket::new(
        1,
        String::from("Joe Buyer"),
        String::from("EVT2026-000001"),
        String::from("tok"),
        String::from("qr"),
    );
    assert_eq!(ticket.ticket_id, None);
    assert_eq!(ticket.checked_in_at, None);
}

#[test]
fn test_new_commission_is_pending() {
    let commission = Commission::new(3, 1, 5000);
    assert_eq!(commission.commission_id, None);
    assert_eq!(commission.status, crate::CommissionStatus::Pending);
    assert_eq!(commission.commission_amount, 5000);
}

#[test]
fn test_link_visit_keeps_unresolved_code() {
    let visit = LinkVisit::new(String::from("NOSUCHCO"), None, None, None);
    assert_eq!(visit.agent_id, None);
    assert_eq!(visit.agent_code, "NOSUCHCO");
    assert!(!visit.visited_at.is_empty());
}
