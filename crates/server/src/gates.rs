// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Access gate extractors for the server.
//!
//! This module provides Axum extractors that enforce the two shared
//! passwords at the server boundary: the admin gate in front of the
//! reconciliation surface and the staff gate in front of check-in.
//! There are no per-user accounts or sessions; the bearer value IS the
//! shared password.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::AppState;

/// Extractor that admits requests carrying the admin password.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(_: AdminGate, ...) -> Result<Json<Response>, HttpError> {
///     // Only reached with a valid admin credential
/// }
/// ```
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if:
/// - Authorization header is missing
/// - Authorization header format is invalid
/// - The presented password does not match the admin gate
pub struct AdminGate;

impl FromRequestParts<AppState> for AdminGate {
    type Rejection = GateError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented: &str = bearer_value(parts)?;

        state.gate.verify_admin(presented).map_err(|e| {
            warn!(error = %e, "Admin gate rejected request");
            GateError::Rejected
        })?;

        debug!("Admin gate passed");
        Ok(Self)
    }
}

/// Extractor that admits requests carrying the staff password.
///
/// Same contract as [`AdminGate`], for the check-in surface.
pub struct StaffGate;

impl FromRequestParts<AppState> for StaffGate {
    type Rejection = GateError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented: &str = bearer_value(parts)?;

        state.gate.verify_staff(presented).map_err(|e| {
            warn!(error = %e, "Staff gate rejected request");
            GateError::Rejected
        })?;

        debug!("Staff gate passed");
        Ok(Self)
    }
}

fn bearer_value(parts: &Parts) -> Result<&str, GateError> {
    let auth_header: &str = parts
        .headers
        .get("Authorization")
        .ok_or_else(|| {
            debug!("Missing Authorization header");
            GateError::MissingAuthorizationHeader
        })?
        .to_str()
        .map_err(|_| {
            warn!("Invalid Authorization header encoding");
            GateError::InvalidAuthorizationHeader
        })?;

    auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        warn!("Authorization header does not start with 'Bearer '");
        GateError::InvalidAuthorizationHeader
    })
}

/// Gate extraction errors.
///
/// These errors are returned when gate verification fails and are
/// automatically converted to HTTP responses.
#[derive(Debug)]
pub enum GateError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// The presented password did not match the gate.
    Rejected,
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let message: &str = match self {
            Self::MissingAuthorizationHeader => "Missing Authorization header",
            Self::InvalidAuthorizationHeader => {
                "Invalid Authorization header format. Expected: 'Bearer <password>'"
            }
            Self::Rejected => "Invalid password",
        };

        (StatusCode::UNAUTHORIZED, message).into_response()
    }
}
