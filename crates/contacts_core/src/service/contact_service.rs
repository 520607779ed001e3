//! Contact use-case service.
//!
//! # Responsibility
//! - Provide the list/create-empty operations behind the root page.
//! - Provide detail, edit, favorite and delete operations for child pages.
//!
//! # Invariants
//! - `list_contacts` hands the filter to the store unchanged; matching
//!   policy belongs to the store.
//! - `create_empty_contact` always inserts a new row; it is not idempotent.

use crate::model::contact::{Contact, ContactId, ContactPatch, ContactValidationError};
use crate::repo::contact_repo::{ContactListQuery, ContactRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for contact use-cases.
#[derive(Debug)]
pub enum ContactServiceError {
    /// Target contact does not exist.
    ContactNotFound(ContactId),
    /// Submitted fields failed validation.
    Invalid(ContactValidationError),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Write succeeded but read-back disagreed.
    InconsistentState(&'static str),
}

impl Display for ContactServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContactNotFound(id) => write!(f, "contact not found: {id}"),
            Self::Invalid(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => {
                write!(f, "inconsistent contact state: {details}")
            }
        }
    }
}

impl Error for ContactServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ContactServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::ContactNotFound(id),
            RepoError::Validation(err) => Self::Invalid(err),
            other => Self::Repo(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ContactServiceError>;

/// Contact service facade over repository implementations.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists contacts, optionally narrowed by free-text `filter`.
    ///
    /// `None` and `Some("")` are distinct and both reach the store as-is.
    pub fn list_contacts(&self, filter: Option<&str>) -> ServiceResult<Vec<Contact>> {
        let query = ContactListQuery::filtered(filter);
        Ok(self.repo.list_contacts(&query)?)
    }

    /// Inserts a blank contact and returns the stored record.
    pub fn create_empty_contact(&self) -> ServiceResult<Contact> {
        let contact = Contact::empty();
        let id = self.repo.create_contact(&contact)?;
        let created = self
            .repo
            .get_contact(id)?
            .ok_or(ContactServiceError::InconsistentState(
                "created contact not found in read-back",
            ))?;

        info!("event=contact_create module=service status=ok contact_id={id}");
        Ok(created)
    }

    pub fn get_contact(&self, id: ContactId) -> ServiceResult<Option<Contact>> {
        Ok(self.repo.get_contact(id)?)
    }

    /// Like [`Self::get_contact`] but treats absence as an error.
    pub fn require_contact(&self, id: ContactId) -> ServiceResult<Contact> {
        self.get_contact(id)?
            .ok_or(ContactServiceError::ContactNotFound(id))
    }

    /// Replaces the user-editable fields from an edit form submission.
    pub fn update_contact(&self, id: ContactId, patch: &ContactPatch) -> ServiceResult<Contact> {
        let mut contact = self.require_contact(id)?;
        contact.apply_patch(patch);
        self.repo.update_contact(&contact)?;

        info!("event=contact_update module=service status=ok contact_id={id}");
        self.reload(id, "updated contact not found in read-back")
    }

    pub fn set_favorite(&self, id: ContactId, favorite: bool) -> ServiceResult<Contact> {
        let mut contact = self.require_contact(id)?;
        if contact.favorite == favorite {
            return Ok(contact);
        }
        contact.favorite = favorite;
        self.repo.update_contact(&contact)?;

        info!(
            "event=contact_favorite module=service status=ok contact_id={id} favorite={favorite}"
        );
        self.reload(id, "favorited contact not found in read-back")
    }

    pub fn delete_contact(&self, id: ContactId) -> ServiceResult<()> {
        self.repo.delete_contact(id)?;
        info!("event=contact_delete module=service status=ok contact_id={id}");
        Ok(())
    }

    fn reload(&self, id: ContactId, details: &'static str) -> ServiceResult<Contact> {
        self.repo
            .get_contact(id)?
            .ok_or(ContactServiceError::InconsistentState(details))
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactService, ContactServiceError};
    use crate::model::contact::{Contact, ContactId};
    use crate::repo::contact_repo::{ContactListQuery, ContactRepository, RepoError, RepoResult};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRepository {
        list_calls: RefCell<Vec<ContactListQuery>>,
    }

    impl ContactRepository for RecordingRepository {
        fn create_contact(&self, contact: &Contact) -> RepoResult<ContactId> {
            Ok(contact.id)
        }

        fn update_contact(&self, contact: &Contact) -> RepoResult<()> {
            Err(RepoError::NotFound(contact.id))
        }

        fn get_contact(&self, _id: ContactId) -> RepoResult<Option<Contact>> {
            Ok(None)
        }

        fn list_contacts(&self, query: &ContactListQuery) -> RepoResult<Vec<Contact>> {
            self.list_calls.borrow_mut().push(query.clone());
            Ok(Vec::new())
        }

        fn delete_contact(&self, _id: ContactId) -> RepoResult<()> {
            Ok(())
        }
    }

    #[test]
    fn list_passes_filter_through_unchanged() {
        let repo = RecordingRepository::default();
        let service = ContactService::new(&repo);

        service.list_contacts(None).unwrap();
        service.list_contacts(Some("")).unwrap();
        service.list_contacts(Some("  Al ")).unwrap();

        let calls = repo.list_calls.borrow();
        assert_eq!(calls[0].filter, None);
        assert_eq!(calls[1].filter.as_deref(), Some(""));
        assert_eq!(calls[2].filter.as_deref(), Some("  Al "));
    }

    #[test]
    fn create_empty_reports_missing_read_back() {
        let repo = RecordingRepository::default();
        let service = ContactService::new(&repo);

        let err = service.create_empty_contact().unwrap_err();
        assert!(matches!(err, ContactServiceError::InconsistentState(_)));
    }
}
