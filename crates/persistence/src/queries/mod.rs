// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `agents` — Agent lookups and referral-code resolution
//! - `orders` — Order lookups with agent attribution attached
//! - `tickets` — Ticket lookups by token, QR token, and order
//! - `commissions` — Commission lookups
//! - `visits` — Link visit listings and per-agent counts
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod agents;
pub mod commissions;
pub mod orders;
pub mod tickets;
pub mod visits;
