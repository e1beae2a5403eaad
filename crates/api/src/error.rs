// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use gatepass_domain::DomainError;
use gatepass_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent
/// the API contract. The server layer maps each variant onto an HTTP
/// status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// Repeated code generation attempts all collided with existing records.
    CodeSpaceExhausted {
        /// The kind of code that could not be generated.
        what: String,
    },
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::CodeSpaceExhausted { what } => {
                write!(f, "Could not generate a unique {what} after repeated attempts")
            }
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// Every domain error is a validation failure from the caller's point of
/// view, so each maps to `InvalidInput` with the offending field named.
#[must_use]
pub fn translate_domain_error(error: &DomainError) -> ApiError {
    let field: &str = match error {
        DomainError::InvalidAgentName(_) => "name",
        DomainError::InvalidCommissionPercent { .. } => "commission_percent",
        DomainError::InvalidPhone(_) => "phone",
        DomainError::InvalidAttendeeName(_) => "attendee_name",
        DomainError::InvalidCheckinToken(_) => "qr_token",
        DomainError::InvalidAmount { .. } => "amount",
        DomainError::InvalidPaymentMethod(_) => "method",
        DomainError::InvalidOrderStatus(_)
        | DomainError::InvalidCommissionStatus(_)
        | DomainError::InvalidStatusTransition { .. } => "status",
    };

    ApiError::InvalidInput {
        field: String::from(field),
        message: error.to_string(),
    }
}

impl From<PersistenceError> for ApiError {
    fn from(error: PersistenceError) -> Self {
        match error {
            PersistenceError::NotFound(message) => Self::ResourceNotFound {
                resource_type: String::from("Record"),
                message,
            },
            PersistenceError::AgentReferenced { agent_id } => Self::InvalidInput {
                field: String::from("agent_id"),
                message: format!(
                    "Agent {agent_id} has recorded orders, commissions, or visits and cannot be deleted"
                ),
            },
            other => Self::Internal {
                message: format!("Persistence failure: {other}"),
            },
        }
    }
}
