//! Store-side contact filtering.
//!
//! # Responsibility
//! - Own the matching policy for the sidebar search box.
//! - Translate free text into safe SQL predicates.

pub mod filter;
