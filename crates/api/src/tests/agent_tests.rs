// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for agent management and the per-agent stats rollup.

use crate::error::ApiError;
use crate::handlers::{
    agent_stats, create_agent, create_order, delete_agent, list_agents, mark_order_paid,
    update_agent,
};
use crate::request_response::UpdateAgentRequest;
use crate::tests::{
    create_agent_request, create_order_request, create_test_config, create_test_persistence,
};

#[test]
fn test_create_agent_generates_code_and_link() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let agent = create_agent(&mut persistence, &config, &create_agent_request("Sara", 10)).unwrap();

    assert_eq!(agent.name, "Sara");
    assert_eq!(agent.code.chars().count(), 8);
    assert_eq!(
        agent.referral_link,
        format!("https://tickets.example.com/?ref={}", agent.code)
    );
}

#[test]
fn test_create_agent_validates_input() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let short_name = create_agent(&mut persistence, &config, &create_agent_request("S", 10));
    assert!(matches!(
        short_name,
        Err(ApiError::InvalidInput { field, .. }) if field == "name"
    ));

    let bad_percent = create_agent(&mut persistence, &config, &create_agent_request("Sara", 101));
    assert!(matches!(
        bad_percent,
        Err(ApiError::InvalidInput { field, .. }) if field == "commission_percent"
    ));
}

#[test]
fn test_update_agent_keeps_code() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let agent = create_agent(&mut persistence, &config, &create_agent_request("Sara", 10)).unwrap();

    let updated = update_agent(
        &mut persistence,
        &config,
        agent.agent_id,
        &UpdateAgentRequest {
            name: String::from("Sara K"),
            commission_percent: 15,
        },
    )
    .unwrap();

    assert_eq!(updated.name, "Sara K");
    assert_eq!(updated.commission_percent, 15);
    assert_eq!(updated.code, agent.code);
}

#[test]
fn test_delete_agent_with_history_is_rejected() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let agent = create_agent(&mut persistence, &config, &create_agent_request("Sara", 10)).unwrap();
    create_order(
        &mut persistence,
        &config,
        &create_order_request(Some(&agent.code)),
    )
    .unwrap();

    let result = delete_agent(&mut persistence, agent.agent_id);
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));

    // The agent is still listed
    assert_eq!(list_agents(&mut persistence, &config).unwrap().len(), 1);
}

#[test]
fn test_agent_stats_rollup() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let agent = create_agent(&mut persistence, &config, &create_agent_request("Sara", 10)).unwrap();

    // Three visits via three orders, one of which gets paid
    let paid = create_order(
        &mut persistence,
        &config,
        &create_order_request(Some(&agent.code)),
    )
    .unwrap();
    for _ in 0..2 {
        create_order(
            &mut persistence,
            &config,
            &create_order_request(Some(&agent.code)),
        )
        .unwrap();
    }
    mark_order_paid(&mut persistence, &paid.order_token).unwrap();

    let stats = agent_stats(&mut persistence).unwrap();
    assert_eq!(stats.len(), 1);

    let sara = &stats[0];
    assert_eq!(sara.visits, 3);
    assert_eq!(sara.orders, 3);
    assert_eq!(sara.paid_orders, 1);
    assert_eq!(sara.revenue, 50_000);
    assert_eq!(sara.commission_total, 5_000);
    // 1 paid of 3 visits, rounded to 2 decimals
    assert!((sara.conversion_rate - 33.33).abs() < f64::EPSILON);
}

#[test]
fn test_agent_stats_zero_visits_zero_conversion() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    create_agent(&mut persistence, &config, &create_agent_request("Omar", 15)).unwrap();

    let stats = agent_stats(&mut persistence).unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].visits, 0);
    assert!((stats[0].conversion_rate - 0.0).abs() < f64::EPSILON);
}
