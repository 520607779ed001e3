//! Contact store and use-case logic for the contacts web app.
//! This crate owns data invariants; it knows nothing about HTTP.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::contact::{Contact, ContactId, ContactPatch, ContactValidationError};
pub use repo::contact_repo::{
    ContactListQuery, ContactRepository, RepoError, RepoResult, SqliteContactRepository,
};
pub use service::contact_service::{ContactService, ContactServiceError, ServiceResult};
pub use service::seed::seed_sample_contacts;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
