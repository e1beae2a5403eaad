// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod commission;
mod error;
mod status;
mod ticket_number;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use commission::{commission_amount, conversion_rate};
pub use error::DomainError;
pub use status::{CommissionStatus, OrderStatus, PaymentMethod};
pub use ticket_number::{TICKET_NUMBER_PREFIX, format_ticket_number};
pub use types::{Agent, Commission, LinkVisit, Order, Ticket, now_timestamp};
pub use validation::{
    normalize_verification_code, validate_agent_name, validate_amount, validate_attendee_name,
    validate_checkin_token, validate_commission_percent, validate_phone,
};
