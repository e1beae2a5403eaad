// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Startup configuration.
//!
//! Configuration is read once at startup into an explicit struct and
//! passed by reference from then on. A missing or malformed variable is
//! a typed, fatal error; nothing is resolved lazily at request time.

use std::env;

/// Configuration errors raised while reading the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing required environment variable: {0}")]
    MissingVariable(String),

    /// An environment variable is set to an unusable value.
    #[error("Invalid value for {variable}: {message}")]
    InvalidVariable {
        /// The variable with the bad value.
        variable: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Application configuration for one event.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Display name of the event.
    pub event_name: String,
    /// Display date of the event.
    pub event_date: String,
    /// Display location of the event.
    pub event_location: String,
    /// Ticket price in Syrian pounds.
    pub ticket_price_syp: i64,
    /// Merchant wallet number buyers transfer to via Syriatel Cash.
    pub syriatel_merchant_number: String,
    /// Merchant wallet number buyers transfer to via MTN Cash.
    pub mtn_merchant_number: String,
    /// Public base URL, used to build referral links.
    pub base_url: String,
    /// Shared password for the admin surface.
    pub admin_password: String,
    /// Shared password for the check-in surface.
    pub staff_password: String,
}

impl AppConfig {
    /// Builds the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariable` if any required variable is
    /// unset, or `ConfigError::InvalidVariable` if `TICKET_PRICE_SYP` is
    /// not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let ticket_price_raw: String = require_var("TICKET_PRICE_SYP")?;
        let ticket_price_syp: i64 =
            ticket_price_raw
                .parse()
                .map_err(|_| ConfigError::InvalidVariable {
                    variable: String::from("TICKET_PRICE_SYP"),
                    message: format!("'{ticket_price_raw}' is not an integer"),
                })?;
        if ticket_price_syp <= 0 {
            return Err(ConfigError::InvalidVariable {
                variable: String::from("TICKET_PRICE_SYP"),
                message: format!("price must be positive, got {ticket_price_syp}"),
            });
        }

        Ok(Self {
            event_name: require_var("EVENT_NAME")?,
            event_date: require_var("EVENT_DATE")?,
            event_location: require_var("EVENT_LOCATION")?,
            ticket_price_syp,
            syriatel_merchant_number: require_var("SYRIATEL_MERCHANT_NUMBER")?,
            mtn_merchant_number: require_var("MTN_MERCHANT_NUMBER")?,
            base_url: require_var("BASE_URL")?,
            admin_password: require_var("ADMIN_PASSWORD")?,
            staff_password: require_var("STAFF_PASSWORD")?,
        })
    }

    /// Builds the referral link for an agent code.
    #[must_use]
    pub fn referral_link(&self, code: &str) -> String {
        format!("{}/?ref={code}", self.base_url)
    }
}

fn require_var(name: &str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVariable(String::from(name))),
    }
}
