//! Contact domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.

pub mod contact;
