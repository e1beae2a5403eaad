// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for token and code generation.

use crate::codes::{human_code, opaque_token, unique_agent_code, unique_code, unique_reference_code};
use crate::error::ApiError;
use crate::tests::create_test_persistence;

const ALPHABET: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

#[test]
fn test_opaque_token_is_hex_of_requested_length() {
    let token = opaque_token(18);
    assert_eq!(token.len(), 36);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));

    let qr = opaque_token(16);
    assert_eq!(qr.len(), 32);
}

#[test]
fn test_opaque_tokens_do_not_repeat() {
    let a = opaque_token(18);
    let b = opaque_token(18);
    assert_ne!(a, b);
}

#[test]
fn test_human_code_uses_restricted_alphabet() {
    for _ in 0..50 {
        let code = human_code(8);
        assert_eq!(code.chars().count(), 8);
        assert!(code.chars().all(|c| ALPHABET.contains(c)));
        // Ambiguous characters are excluded outright
        assert!(!code.contains('0'));
        assert!(!code.contains('O'));
        assert!(!code.contains('1'));
        assert!(!code.contains('I'));
    }
}

#[test]
fn test_unique_reference_code_format() {
    let mut persistence = create_test_persistence();

    let code = unique_reference_code(&mut persistence).unwrap();
    assert!(code.starts_with("EVT-"));
    assert_eq!(code.chars().count(), 9);
    assert!(code[4..].chars().all(|c| ALPHABET.contains(c)));
}

#[test]
fn test_unique_agent_code_format() {
    let mut persistence = create_test_persistence();

    let code = unique_agent_code(&mut persistence).unwrap();
    assert_eq!(code.chars().count(), 8);
    assert!(code.chars().all(|c| ALPHABET.contains(c)));
}

#[test]
fn test_unique_code_retries_past_a_collision() {
    let mut draws = 0;
    let code = unique_code(
        "agent code",
        || {
            draws += 1;
            format!("CODE{draws}")
        },
        // First candidate is taken, second is free
        |candidate| Ok(candidate == "CODE1"),
    )
    .unwrap();

    assert_eq!(code, "CODE2");
    assert_eq!(draws, 2);
}

#[test]
fn test_unique_code_gives_up_after_five_collisions() {
    let mut draws = 0;
    let result = unique_code(
        "agent code",
        || {
            draws += 1;
            String::from("TAKEN")
        },
        |_| Ok(true),
    );

    assert_eq!(draws, 5);
    assert!(matches!(
        result,
        Err(ApiError::CodeSpaceExhausted { what }) if what == "agent code"
    ));
}

#[test]
fn test_unique_code_propagates_existence_check_failure() {
    let result = unique_code(
        "reference code",
        || String::from("CODE"),
        |_| {
            Err(ApiError::Internal {
                message: String::from("store unavailable"),
            })
        },
    );

    assert!(matches!(result, Err(ApiError::Internal { .. })));
}
