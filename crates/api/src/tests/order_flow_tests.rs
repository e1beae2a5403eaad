// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the buyer order flow: creation, attribution, payment
//! details, verification codes, and status polling.

use crate::error::ApiError;
use crate::handlers::{
    create_agent, create_order, find_order_by_reference, get_order_status, save_payment_details,
    save_verification_code,
};
use crate::request_response::{SavePaymentRequest, SaveVerificationCodeRequest};
use crate::tests::{
    create_agent_request, create_order_request, create_test_config, create_test_persistence,
};

#[test]
fn test_create_order_without_referral() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let response = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();

    assert_eq!(response.amount, 50_000);
    assert_eq!(response.order_token.len(), 36);
    assert!(response.reference_code.starts_with("EVT-"));
    assert_eq!(response.syriatel_merchant_number, "098765432");
    assert_eq!(response.mtn_merchant_number, "094123456");
    assert!(response.agent_name.is_none());

    // No referral, no visit
    assert!(persistence.list_visits().unwrap().is_empty());
}

#[test]
fn test_create_order_rejects_non_positive_ticket_price() {
    let mut persistence = create_test_persistence();
    let mut config = create_test_config();
    config.ticket_price_syp = 0;

    let result = create_order(&mut persistence, &config, &create_order_request(None));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { field, .. }) if field == "amount"
    ));
    assert!(persistence.list_orders().unwrap().is_empty());
}

#[test]
fn test_create_order_with_referral_attributes_and_counts_visit() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let agent = create_agent(&mut persistence, &config, &create_agent_request("Sara", 10)).unwrap();

    let response = create_order(
        &mut persistence,
        &config,
        &create_order_request(Some(&agent.code)),
    )
    .unwrap();
    assert_eq!(response.agent_name.as_deref(), Some("Sara"));

    let status = get_order_status(&mut persistence, &response.order_token).unwrap();
    assert_eq!(status.agent_name.as_deref(), Some("Sara"));

    let visits = persistence.list_visits().unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0].agent_id, Some(agent.agent_id));
}

#[test]
fn test_create_order_with_unknown_referral_proceeds_unattributed() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let response = create_order(
        &mut persistence,
        &config,
        &create_order_request(Some("N0TAC0DE")),
    )
    .unwrap();

    assert!(response.agent_name.is_none());

    // The visit is still recorded, unattributed
    let visits = persistence.list_visits().unwrap();
    assert_eq!(visits.len(), 1);
    assert!(visits[0].agent_id.is_none());
}

#[test]
fn test_create_order_skips_visit_when_already_counted() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let agent = create_agent(&mut persistence, &config, &create_agent_request("Sara", 10)).unwrap();

    let mut request = create_order_request(Some(&agent.code));
    request.already_counted = true;
    let response = create_order(&mut persistence, &config, &request).unwrap();

    // Attribution still happens; only the visit count is skipped
    assert_eq!(response.agent_name.as_deref(), Some("Sara"));
    assert!(persistence.list_visits().unwrap().is_empty());
}

#[test]
fn test_find_order_by_reference_code() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let created = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();

    let found = find_order_by_reference(&mut persistence, &created.reference_code).unwrap();
    assert_eq!(found.order_token, created.order_token);
    assert_eq!(found.status, "PENDING");

    let missing = find_order_by_reference(&mut persistence, "EVT-ZZZZZ");
    assert!(matches!(
        missing,
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_save_payment_details_flow() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let created = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();

    let response = save_payment_details(
        &mut persistence,
        &created.order_token,
        &SavePaymentRequest {
            method: String::from("SYRIATEL"),
            phone: String::from("0931234567"),
        },
    )
    .unwrap();
    assert_eq!(response.method, "SYRIATEL");

    let status = get_order_status(&mut persistence, &created.order_token).unwrap();
    assert_eq!(status.method.as_deref(), Some("SYRIATEL"));
    assert_eq!(status.phone.as_deref(), Some("0931234567"));
}

#[test]
fn test_save_payment_details_rejects_bad_method_and_phone() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let created = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();

    let bad_method = save_payment_details(
        &mut persistence,
        &created.order_token,
        &SavePaymentRequest {
            method: String::from("HAWALA"),
            phone: String::from("0931234567"),
        },
    );
    assert!(matches!(
        bad_method,
        Err(ApiError::InvalidInput { field, .. }) if field == "method"
    ));

    let bad_phone = save_payment_details(
        &mut persistence,
        &created.order_token,
        &SavePaymentRequest {
            method: String::from("MTN"),
            phone: String::from("123"),
        },
    );
    assert!(matches!(
        bad_phone,
        Err(ApiError::InvalidInput { field, .. }) if field == "phone"
    ));
}

#[test]
fn test_save_verification_code_truncates_and_flags_status() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let created = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();

    let before = get_order_status(&mut persistence, &created.order_token).unwrap();
    assert!(!before.verification_code_entered);

    save_verification_code(
        &mut persistence,
        &created.order_token,
        &SaveVerificationCodeRequest {
            verification_code: format!("  {}  ", "X".repeat(30)),
        },
    )
    .unwrap();

    let after = get_order_status(&mut persistence, &created.order_token).unwrap();
    assert!(after.verification_code_entered);
}

#[test]
fn test_save_verification_code_rejects_blank() {
    let mut persistence = create_test_persistence();
    let config = create_test_config();

    let created = create_order(&mut persistence, &config, &create_order_request(None)).unwrap();

    let result = save_verification_code(
        &mut persistence,
        &created.order_token,
        &SaveVerificationCodeRequest {
            verification_code: String::from("   "),
        },
    );
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_get_order_status_unknown_token() {
    let mut persistence = create_test_persistence();

    let result = get_order_status(&mut persistence, "deadbeef");
    assert!(matches!(
        result,
        Err(ApiError::ResourceNotFound { .. })
    ));
}
