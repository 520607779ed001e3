//! View models for the contact detail and edit pages.

use super::shell::NO_NAME_LABEL;
use contacts_core::{Contact, ContactPatch};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetailView {
    pub id: String,
    pub label: String,
    pub named: bool,
    pub avatar: Option<String>,
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: bool,
}

impl From<&Contact> for ContactDetailView {
    fn from(contact: &Contact) -> Self {
        let (label, named) = match contact.display_name() {
            Some(name) => (name, true),
            None => (NO_NAME_LABEL.to_string(), false),
        };
        Self {
            id: contact.id.to_string(),
            label,
            named,
            avatar: contact.avatar.clone(),
            twitter: contact.twitter.clone(),
            notes: contact.notes.clone(),
            favorite: contact.favorite,
        }
    }
}

/// Edit form state; optional fields render as empty inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditFormView {
    pub id: String,
    pub first: String,
    pub last: String,
    pub avatar: String,
    pub twitter: String,
    pub notes: String,
    pub error: Option<String>,
}

impl From<&Contact> for EditFormView {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id.to_string(),
            first: contact.first.clone(),
            last: contact.last.clone(),
            avatar: contact.avatar.clone().unwrap_or_default(),
            twitter: contact.twitter.clone().unwrap_or_default(),
            notes: contact.notes.clone().unwrap_or_default(),
            error: None,
        }
    }
}

impl EditFormView {
    /// Re-renders a rejected submission with the user's input intact.
    pub fn rejected(contact: &Contact, patch: &ContactPatch, error: impl Into<String>) -> Self {
        Self {
            id: contact.id.to_string(),
            first: patch.first.clone(),
            last: patch.last.clone(),
            avatar: patch.avatar.clone().unwrap_or_default(),
            twitter: patch.twitter.clone().unwrap_or_default(),
            notes: patch.notes.clone().unwrap_or_default(),
            error: Some(error.into()),
        }
    }
}
