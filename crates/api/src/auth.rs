// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared-password access gates.
//!
//! There are no per-user accounts. Two shared passwords — one for the
//! admin reconciliation surface, one for the door staff check-in
//! surface — are read from configuration and bcrypt-hashed once at
//! startup. Request extractors in the server present the bearer value
//! here for verification.

use tracing::warn;

use crate::error::ApiError;

/// Bcrypt cost for the startup hashes.
///
/// The gates verify on every authenticated request, so the cost is kept
/// below bcrypt's default interactive-login cost.
const GATE_BCRYPT_COST: u32 = 8;

/// Verifier for the two shared access passwords.
pub struct AccessGate {
    admin_hash: String,
    staff_hash: String,
}

impl AccessGate {
    /// Hashes both shared passwords.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Internal` if hashing fails.
    pub fn new(admin_password: &str, staff_password: &str) -> Result<Self, ApiError> {
        let admin_hash: String =
            bcrypt::hash(admin_password, GATE_BCRYPT_COST).map_err(|e| ApiError::Internal {
                message: format!("Failed to hash admin password: {e}"),
            })?;
        let staff_hash: String =
            bcrypt::hash(staff_password, GATE_BCRYPT_COST).map_err(|e| ApiError::Internal {
                message: format!("Failed to hash staff password: {e}"),
            })?;

        Ok(Self {
            admin_hash,
            staff_hash,
        })
    }

    /// Verifies a presented password against the admin gate.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AuthenticationFailed` if the password does not
    /// match.
    pub fn verify_admin(&self, presented: &str) -> Result<(), ApiError> {
        verify_against(presented, &self.admin_hash, "admin")
    }

    /// Verifies a presented password against the staff gate.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::AuthenticationFailed` if the password does not
    /// match.
    pub fn verify_staff(&self, presented: &str) -> Result<(), ApiError> {
        verify_against(presented, &self.staff_hash, "staff")
    }
}

fn verify_against(presented: &str, hash: &str, gate: &str) -> Result<(), ApiError> {
    let matches: bool = bcrypt::verify(presented, hash).map_err(|e| ApiError::Internal {
        message: format!("Password verification failed: {e}"),
    })?;

    if matches {
        Ok(())
    } else {
        warn!("Rejected credential at the {} gate", gate);
        Err(ApiError::AuthenticationFailed {
            reason: format!("Invalid {gate} password"),
        })
    }
}
