//! Contact store contracts and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract the loaders and actions depend on.
//! - Keep SQLite query details out of the service layer.
//!
//! # Invariants
//! - Writes run `Contact::validate()` before any SQL mutation.
//! - Missing rows surface as `NotFound`, not as silent no-ops.

pub mod contact_repo;
