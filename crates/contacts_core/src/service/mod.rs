//! Contact use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the operations HTTP handlers need.
//! - Keep the web layer decoupled from storage details.

pub mod contact_service;
pub mod seed;
