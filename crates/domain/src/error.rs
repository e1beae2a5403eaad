// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Agent name is outside the permitted length range.
    InvalidAgentName(String),
    /// Commission percent is outside 0-100.
    InvalidCommissionPercent {
        /// The invalid percent value.
        percent: i32,
    },
    /// Phone number is outside the permitted length range.
    InvalidPhone(String),
    /// Attendee name is outside the permitted length range.
    InvalidAttendeeName(String),
    /// Check-in token is too short to be a QR token.
    InvalidCheckinToken(String),
    /// Order amount must be positive.
    InvalidAmount {
        /// The invalid amount value.
        amount: i64,
    },
    /// Payment method string is not a recognized method.
    InvalidPaymentMethod(String),
    /// Order status string is not a recognized status.
    InvalidOrderStatus(String),
    /// Commission status string is not a recognized status.
    InvalidCommissionStatus(String),
    /// Order status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAgentName(msg) => write!(f, "Invalid agent name: {msg}"),
            Self::InvalidCommissionPercent { percent } => {
                write!(
                    f,
                    "Invalid commission percent: {percent}. Must be between 0 and 100"
                )
            }
            Self::InvalidPhone(msg) => write!(f, "Invalid phone number: {msg}"),
            Self::InvalidAttendeeName(msg) => write!(f, "Invalid attendee name: {msg}"),
            Self::InvalidCheckinToken(msg) => write!(f, "Invalid check-in token: {msg}"),
            Self::InvalidAmount { amount } => {
                write!(f, "Invalid order amount: {amount}. Must be greater than 0")
            }
            Self::InvalidPaymentMethod(msg) => write!(f, "Invalid payment method: {msg}"),
            Self::InvalidOrderStatus(msg) => write!(f, "Invalid order status: {msg}"),
            Self::InvalidCommissionStatus(msg) => write!(f, "Invalid commission status: {msg}"),
            Self::InvalidStatusTransition { from, to } => {
                write!(f, "Invalid order status transition from {from} to {to}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
