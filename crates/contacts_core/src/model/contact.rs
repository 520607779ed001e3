//! Contact domain model.
//!
//! # Responsibility
//! - Define the canonical contact record shared by list/detail/edit views.
//! - Validate user-editable fields before they reach storage.
//!
//! # Invariants
//! - `id` is generated once and never reassigned or reused.
//! - `created_at` is owned by storage; in-memory values are `0` until the
//!   record has been read back.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::Url;
use uuid::Uuid;

/// Stable identifier for a contact.
pub type ContactId = Uuid;

/// Maximum characters accepted for `first` and `last`.
pub const NAME_MAX_CHARS: usize = 200;
/// Maximum characters accepted for `notes`.
pub const NOTES_MAX_CHARS: usize = 10_000;

/// Canonical contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: ContactId,
    pub first: String,
    pub last: String,
    /// Absolute `http`/`https` image URL.
    pub avatar: Option<String>,
    /// Handle without the leading `@`.
    pub twitter: Option<String>,
    pub notes: Option<String>,
    pub favorite: bool,
    /// Unix epoch milliseconds, assigned on insert.
    pub created_at: i64,
}

/// Validation failures for user-editable contact fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactValidationError {
    FieldTooLong {
        field: &'static str,
        max_chars: usize,
    },
    InvalidAvatarUrl(String),
    InvalidTwitterHandle(String),
}

impl Display for ContactValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FieldTooLong { field, max_chars } => {
                write!(f, "`{field}` must be at most {max_chars} characters")
            }
            Self::InvalidAvatarUrl(value) => {
                write!(f, "avatar must be an absolute http(s) URL, got `{value}`")
            }
            Self::InvalidTwitterHandle(value) => {
                write!(f, "twitter handle must not contain whitespace, got `{value}`")
            }
        }
    }
}

impl Error for ContactValidationError {}

impl Contact {
    /// Creates a blank contact with a freshly generated id.
    ///
    /// Only `id` is guaranteed to be meaningful; everything else is empty.
    pub fn empty() -> Self {
        Self::with_id(Uuid::new_v4())
    }

    /// Creates a blank contact with a caller-provided id.
    ///
    /// Used by seeding and tests where identity is fixed up front.
    pub fn with_id(id: ContactId) -> Self {
        Self {
            id,
            first: String::new(),
            last: String::new(),
            avatar: None,
            twitter: None,
            notes: None,
            favorite: false,
            created_at: 0,
        }
    }

    /// Returns `true` when neither name part carries text.
    pub fn is_unnamed(&self) -> bool {
        self.first.trim().is_empty() && self.last.trim().is_empty()
    }

    /// Joins non-empty name parts with a single space.
    ///
    /// Returns `None` for unnamed contacts so views can pick a placeholder.
    pub fn display_name(&self) -> Option<String> {
        if self.is_unnamed() {
            return None;
        }
        let parts = [self.first.trim(), self.last.trim()];
        Some(
            parts
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" "),
        )
    }

    /// Checks field-level constraints.
    pub fn validate(&self) -> Result<(), ContactValidationError> {
        check_len("first", &self.first, NAME_MAX_CHARS)?;
        check_len("last", &self.last, NAME_MAX_CHARS)?;
        if let Some(notes) = &self.notes {
            check_len("notes", notes, NOTES_MAX_CHARS)?;
        }

        if let Some(avatar) = &self.avatar {
            let valid = Url::parse(avatar)
                .map(|url| matches!(url.scheme(), "http" | "https"))
                .unwrap_or(false);
            if !valid {
                return Err(ContactValidationError::InvalidAvatarUrl(avatar.clone()));
            }
        }

        if let Some(twitter) = &self.twitter {
            if twitter.chars().any(char::is_whitespace) {
                return Err(ContactValidationError::InvalidTwitterHandle(
                    twitter.clone(),
                ));
            }
        }

        Ok(())
    }

    /// Applies an edit form submission in place.
    pub fn apply_patch(&mut self, patch: &ContactPatch) {
        self.first = patch.first.trim().to_string();
        self.last = patch.last.trim().to_string();
        self.avatar = non_blank(patch.avatar.as_deref());
        self.twitter = non_blank(
            patch
                .twitter
                .as_deref()
                .map(|handle| handle.trim().trim_start_matches('@')),
        );
        self.notes = non_blank(patch.notes.as_deref());
    }
}

/// Full replacement of the user-editable fields, as posted by the edit form.
///
/// `favorite` is deliberately absent; it has its own toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactPatch {
    #[serde(default)]
    pub first: String,
    #[serde(default)]
    pub last: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

fn check_len(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), ContactValidationError> {
    if value.chars().count() > max_chars {
        return Err(ContactValidationError::FieldTooLong { field, max_chars });
    }
    Ok(())
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
