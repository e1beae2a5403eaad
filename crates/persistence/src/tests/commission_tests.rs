// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for commission persistence operations.

use gatepass_domain::CommissionStatus;

use crate::tests::{
    create_test_agent, create_test_commission, create_test_order, create_test_persistence,
};

#[test]
fn test_create_and_get_commission() {
    let mut persistence = create_test_persistence();

    let agent_id = persistence
        .create_agent(&create_test_agent("Sara", "SARAC0DE", 10))
        .unwrap();
    let order_id = persistence
        .create_order(&create_test_order("c1", 50_000))
        .unwrap();

    let inserted = persistence
        .create_commission_if_absent(&create_test_commission(agent_id, order_id, 5_000))
        .unwrap();
    assert!(inserted);

    let commission = persistence
        .get_commission_by_order(order_id)
        .unwrap()
        .unwrap();
    assert_eq!(commission.agent_id, agent_id);
    assert_eq!(commission.commission_amount, 5_000);
    assert_eq!(commission.status, CommissionStatus::Pending);
}

#[test]
fn test_at_most_one_commission_per_order() {
    let mut persistence = create_test_persistence();

    let agent_id = persistence
        .create_agent(&create_test_agent("Sara", "SARAC0DE", 10))
        .unwrap();
    let order_id = persistence
        .create_order(&create_test_order("c2", 50_000))
        .unwrap();

    let first = persistence
        .create_commission_if_absent(&create_test_commission(agent_id, order_id, 5_000))
        .unwrap();
    let second = persistence
        .create_commission_if_absent(&create_test_commission(agent_id, order_id, 7_500))
        .unwrap();

    assert!(first);
    assert!(!second);

    // The original amount survives the ignored insert
    let commission = persistence
        .get_commission_by_order(order_id)
        .unwrap()
        .unwrap();
    assert_eq!(commission.commission_amount, 5_000);
}

#[test]
fn test_get_commission_returns_none_when_absent() {
    let mut persistence = create_test_persistence();

    let order_id = persistence
        .create_order(&create_test_order("c3", 50_000))
        .unwrap();

    assert!(persistence.get_commission_by_order(order_id).unwrap().is_none());
}

#[test]
fn test_list_commissions_for_agent() {
    let mut persistence = create_test_persistence();

    let sara = persistence
        .create_agent(&create_test_agent("Sara", "SARAC0DE", 10))
        .unwrap();
    let omar = persistence
        .create_agent(&create_test_agent("Omar", "OMARC0DE", 15))
        .unwrap();
    let order_a = persistence
        .create_order(&create_test_order("c4", 50_000))
        .unwrap();
    let order_b = persistence
        .create_order(&create_test_order("c5", 50_000))
        .unwrap();
    let order_c = persistence
        .create_order(&create_test_order("c6", 50_000))
        .unwrap();

    persistence
        .create_commission_if_absent(&create_test_commission(sara, order_a, 5_000))
        .unwrap();
    persistence
        .create_commission_if_absent(&create_test_commission(sara, order_b, 5_000))
        .unwrap();
    persistence
        .create_commission_if_absent(&create_test_commission(omar, order_c, 7_500))
        .unwrap();

    let all = persistence.list_commissions().unwrap();
    assert_eq!(all.len(), 3);

    let saras = persistence.list_commissions_for_agent(sara).unwrap();
    assert_eq!(saras.len(), 2);
    assert!(saras.iter().all(|c| c.agent_id == sara));
}
