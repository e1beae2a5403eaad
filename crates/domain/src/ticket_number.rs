// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Prefix for human-readable ticket serials.
pub const TICKET_NUMBER_PREFIX: &str = "EVT2026";

/// Formats a counter value as a ticket serial.
///
/// Sequence 1 becomes `EVT2026-000001`. The counter is allocated by the
/// persistence layer inside a transaction, so serials are strictly
/// increasing and never reused.
#[must_use]
pub fn format_ticket_number(sequence: i64) -> String {
    format!("{TICKET_NUMBER_PREFIX}-{sequence:06}")
}
