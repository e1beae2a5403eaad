// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod agent_tests;
mod checkin_tests;
mod code_tests;
mod order_flow_tests;
mod reconciliation_tests;

use gatepass_persistence::Persistence;

use crate::config::AppConfig;
use crate::request_response::{CreateAgentRequest, CreateOrderRequest};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("In-memory database should initialize")
}

pub fn create_test_config() -> AppConfig {
    AppConfig {
        event_name: String::from("Layali Sharqiya"),
        event_date: String::from("2026-09-15"),
        event_location: String::from("Damascus Opera House"),
        ticket_price_syp: 50_000,
        syriatel_merchant_number: String::from("098765432"),
        mtn_merchant_number: String::from("094123456"),
        base_url: String::from("https://tickets.example.com"),
        admin_password: String::from("admin-secret"),
        staff_password: String::from("staff-secret"),
    }
}

pub fn create_order_request(referral_code: Option<&str>) -> CreateOrderRequest {
    CreateOrderRequest {
        referral_code: referral_code.map(String::from),
        already_counted: false,
        ip_address: Some(String::from("203.0.113.7")),
        user_agent: Some(String::from("test-agent/1.0")),
    }
}

pub fn create_agent_request(name: &str, commission_percent: i32) -> CreateAgentRequest {
    CreateAgentRequest {
        name: String::from(name),
        commission_percent,
    }
}
