// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Most mutations use Diesel DSL and are backend-agnostic, with minimal use of
//! backend-specific helpers (e.g., `last_insert_rowid()` for `SQLite`).
//!
//! ## Module Organization
//!
//! - `agents` — Agent creation, update, and guarded deletion
//! - `orders` — Order creation and the guarded status transitions
//! - `tickets` — Ticket issuance and the conditional check-in write
//! - `commissions` — At-most-once commission insertion
//! - `visits` — Append-only visit recording
//! - `counter` — Transactional ticket serial allocation
//!
//! ## Race Closure
//!
//! The transitions that the admin dashboard and door scanner can race on
//! are expressed as conditional writes here, not as check-then-act logic
//! in callers: mark-paid guards on `status = 'PENDING'`, check-in guards
//! on `checked_in_at IS NULL`, and commissions insert-or-ignore against
//! the unique `order_id`.

pub mod agents;
pub mod commissions;
pub mod counter;
pub mod orders;
pub mod tickets;
pub mod visits;
