// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pure field validators.
//!
//! All validators run before any write; a request either passes every
//! check or nothing is persisted. Length checks count characters, not
//! bytes, so multi-byte names are measured the way buyers typed them.

use crate::error::DomainError;

/// Validates an agent display name.
///
/// # Arguments
///
/// * `name` - The name to validate (caller trims whitespace)
///
/// # Errors
///
/// Returns `DomainError::InvalidAgentName` if the name is shorter than
/// 2 or longer than 100 characters.
pub fn validate_agent_name(name: &str) -> Result<(), DomainError> {
    let len: usize = name.chars().count();
    if !(2..=100).contains(&len) {
        return Err(DomainError::InvalidAgentName(String::from(
            "Agent name must be between 2 and 100 characters",
        )));
    }
    Ok(())
}

/// Validates a commission percentage.
///
/// # Errors
///
/// Returns `DomainError::InvalidCommissionPercent` if the value is
/// outside 0-100 inclusive.
pub fn validate_commission_percent(percent: i32) -> Result<(), DomainError> {
    if !(0..=100).contains(&percent) {
        return Err(DomainError::InvalidCommissionPercent { percent });
    }
    Ok(())
}

/// Validates a buyer phone number.
///
/// # Errors
///
/// Returns `DomainError::InvalidPhone` if the trimmed value is shorter
/// than 6 or longer than 30 characters.
pub fn validate_phone(phone: &str) -> Result<(), DomainError> {
    let len: usize = phone.trim().chars().count();
    if !(6..=30).contains(&len) {
        return Err(DomainError::InvalidPhone(String::from(
            "Phone number must be between 6 and 30 characters",
        )));
    }
    Ok(())
}

/// Validates an attendee name.
///
/// # Errors
///
/// Returns `DomainError::InvalidAttendeeName` if the trimmed value is
/// shorter than 3 or longer than 120 characters.
pub fn validate_attendee_name(name: &str) -> Result<(), DomainError> {
    let len: usize = name.trim().chars().count();
    if !(3..=120).contains(&len) {
        return Err(DomainError::InvalidAttendeeName(String::from(
            "Attendee name must be between 3 and 120 characters",
        )));
    }
    Ok(())
}

/// Validates a scanned check-in token before any lookup.
///
/// QR tokens are 32 hex characters; anything under 8 is a misread or a
/// guess and is rejected without touching the store.
///
/// # Errors
///
/// Returns `DomainError::InvalidCheckinToken` if the trimmed value is
/// shorter than 8 characters.
pub fn validate_checkin_token(token: &str) -> Result<(), DomainError> {
    if token.trim().chars().count() < 8 {
        return Err(DomainError::InvalidCheckinToken(String::from(
            "Check-in token must be at least 8 characters",
        )));
    }
    Ok(())
}

/// Validates an order amount.
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` if the amount is not positive.
pub fn validate_amount(amount: i64) -> Result<(), DomainError> {
    if amount <= 0 {
        return Err(DomainError::InvalidAmount { amount });
    }
    Ok(())
}

/// Normalizes a buyer-entered transfer confirmation code.
///
/// The code is free text; it is trimmed and truncated to 20 characters
/// rather than rejected, since buyers copy it from a wallet SMS.
#[must_use]
pub fn normalize_verification_code(code: &str) -> String {
    code.trim().chars().take(20).collect()
}
