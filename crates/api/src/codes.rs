// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opaque token and human-readable code generation.
//!
//! Two kinds of identifiers leave this module:
//!
//! - **Opaque tokens** (order, ticket, QR): hex from cryptographically
//!   random bytes. Generation does not check uniqueness; the UNIQUE
//!   constraints in storage are the backstop, and a collision in this
//!   space is not a realistic event.
//! - **Human codes** (agent, reference): short strings over an alphabet
//!   with 0/O and 1/I removed, read aloud over the phone and typed from
//!   paper. These are short enough to collide, so the `unique_*` helpers
//!   check each candidate against existing records and give up after a
//!   bounded number of attempts.

use rand::Rng;
use rand::RngExt;

use crate::error::ApiError;
use gatepass_persistence::Persistence;

/// Alphabet for human-readable codes. Excludes 0/O and 1/I.
const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Maximum generation attempts before a code space is declared exhausted.
const MAX_CODE_ATTEMPTS: u32 = 5;

/// Number of random bytes behind order and ticket page tokens.
pub const ORDER_TOKEN_BYTES: usize = 18;

/// Number of random bytes behind QR tokens.
pub const QR_TOKEN_BYTES: usize = 16;

/// Length of an agent referral code.
pub const AGENT_CODE_LEN: usize = 8;

/// Length of the random portion of a reference code.
pub const REFERENCE_CODE_LEN: usize = 5;

/// Prefix on every order reference code.
pub const REFERENCE_CODE_PREFIX: &str = "EVT-";

/// Generates an opaque token of `byte_len` random bytes, hex-encoded.
///
/// The returned string is `2 * byte_len` lowercase hex characters.
#[must_use]
pub fn opaque_token(byte_len: usize) -> String {
    let mut bytes: Vec<u8> = vec![0u8; byte_len];
    rand::rng().fill_bytes(&mut bytes);

    bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Generates a human-readable code of `len` characters from the
/// restricted alphabet.
#[must_use]
pub fn human_code(len: usize) -> String {
    let mut rng = rand::rng();

    (0..len)
        .map(|_| char::from(CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())]))
        .collect()
}

/// Draws candidates from `generate` until `exists` clears one, giving up
/// after [`MAX_CODE_ATTEMPTS`] collisions.
///
/// # Errors
///
/// Returns `ApiError::CodeSpaceExhausted` naming `what` if every candidate
/// collides, or an error if the existence check fails.
pub(crate) fn unique_code<G, E>(
    what: &str,
    mut generate: G,
    mut exists: E,
) -> Result<String, ApiError>
where
    G: FnMut() -> String,
    E: FnMut(&str) -> Result<bool, ApiError>,
{
    for _ in 0..MAX_CODE_ATTEMPTS {
        let candidate: String = generate();
        if !exists(&candidate)? {
            return Ok(candidate);
        }
    }

    Err(ApiError::CodeSpaceExhausted {
        what: String::from(what),
    })
}

/// Generates a reference code (`EVT-` plus five alphabet characters) not
/// yet assigned to any order.
///
/// # Errors
///
/// Returns `ApiError::CodeSpaceExhausted` if five candidates in a row
/// collide, or an error if the existence check fails.
pub fn unique_reference_code(persistence: &mut Persistence) -> Result<String, ApiError> {
    unique_code(
        "reference code",
        || format!("{REFERENCE_CODE_PREFIX}{}", human_code(REFERENCE_CODE_LEN)),
        |candidate| Ok(persistence.reference_code_exists(candidate)?),
    )
}

/// Generates an eight-character agent referral code not yet assigned to
/// any agent.
///
/// # Errors
///
/// Returns `ApiError::CodeSpaceExhausted` if five candidates in a row
/// collide, or an error if the existence check fails.
pub fn unique_agent_code(persistence: &mut Persistence) -> Result<String, ApiError> {
    unique_code(
        "agent code",
        || human_code(AGENT_CODE_LEN),
        |candidate| Ok(persistence.agent_code_exists(candidate)?),
    )
}
