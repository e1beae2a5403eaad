// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod commission_tests;
mod ticket_tests;

use gatepass_domain::{Agent, Commission, LinkVisit, Order, Ticket};

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("In-memory database should initialize")
}

pub fn create_test_agent(name: &str, code: &str, commission_percent: i32) -> Agent {
    Agent::new(String::from(name), String::from(code), commission_percent)
}

/// Creates a pending order with tokens derived from the given suffix.
///
/// Each test runs against its own in-memory database, so the derived
/// tokens only need to be unique within one test.
pub fn create_test_order(suffix: &str, amount: i64) -> Order {
    Order::new(
        format!("ordertoken{suffix}"),
        amount,
        format!("EVT-{suffix}"),
    )
}

pub fn create_test_ticket(order_id: i64, suffix: &str) -> Ticket {
    Ticket::new(
        order_id,
        String::from("Test Attendee"),
        format!("EVT2026-0000{suffix}"),
        format!("tickettoken{suffix}"),
        format!("qrtoken{suffix}"),
    )
}

pub fn create_test_commission(agent_id: i64, order_id: i64, commission_amount: i64) -> Commission {
    Commission::new(agent_id, order_id, commission_amount)
}

pub fn create_test_visit(agent_code: &str, agent_id: Option<i64>) -> LinkVisit {
    LinkVisit::new(
        String::from(agent_code),
        agent_id,
        Some(String::from("203.0.113.7")),
        Some(String::from("test-agent/1.0")),
    )
}
