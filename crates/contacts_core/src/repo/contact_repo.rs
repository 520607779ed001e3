//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide list/get/create/update/delete over the `contacts` table.
//! - Apply the store-side search filter when listing.
//!
//! # Invariants
//! - List order is `last ASC, created_at ASC, id ASC`.
//! - Read paths reject invalid persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::contact::{Contact, ContactId, ContactValidationError};
use crate::search::filter::compile_filter;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    first,
    last,
    avatar,
    twitter,
    notes,
    favorite,
    created_at
FROM contacts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ContactValidationError),
    Db(DbError),
    NotFound(ContactId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Query options for listing contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactListQuery {
    /// Raw search text; `None` lists everything.
    pub filter: Option<String>,
}

impl ContactListQuery {
    pub fn filtered(filter: Option<&str>) -> Self {
        Self {
            filter: filter.map(str::to_string),
        }
    }
}

/// Contact store interface.
pub trait ContactRepository {
    fn create_contact(&self, contact: &Contact) -> RepoResult<ContactId>;
    fn update_contact(&self, contact: &Contact) -> RepoResult<()>;
    fn get_contact(&self, id: ContactId) -> RepoResult<Option<Contact>>;
    fn list_contacts(&self, query: &ContactListQuery) -> RepoResult<Vec<Contact>>;
    fn delete_contact(&self, id: ContactId) -> RepoResult<()>;
}

impl<R: ContactRepository + ?Sized> ContactRepository for &R {
    fn create_contact(&self, contact: &Contact) -> RepoResult<ContactId> {
        (**self).create_contact(contact)
    }

    fn update_contact(&self, contact: &Contact) -> RepoResult<()> {
        (**self).update_contact(contact)
    }

    fn get_contact(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        (**self).get_contact(id)
    }

    fn list_contacts(&self, query: &ContactListQuery) -> RepoResult<Vec<Contact>> {
        (**self).list_contacts(query)
    }

    fn delete_contact(&self, id: ContactId) -> RepoResult<()> {
        (**self).delete_contact(id)
    }
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Wraps a connection returned by `open_db`/`open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn create_contact(&self, contact: &Contact) -> RepoResult<ContactId> {
        contact.validate()?;

        self.conn.execute(
            "INSERT INTO contacts (
                id,
                first,
                last,
                avatar,
                twitter,
                notes,
                favorite
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
            params![
                contact.id.to_string(),
                contact.first.as_str(),
                contact.last.as_str(),
                contact.avatar.as_deref(),
                contact.twitter.as_deref(),
                contact.notes.as_deref(),
                bool_to_int(contact.favorite),
            ],
        )?;

        Ok(contact.id)
    }

    fn update_contact(&self, contact: &Contact) -> RepoResult<()> {
        contact.validate()?;

        let changed = self.conn.execute(
            "UPDATE contacts
             SET
                first = ?1,
                last = ?2,
                avatar = ?3,
                twitter = ?4,
                notes = ?5,
                favorite = ?6,
                updated_at = CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER)
             WHERE id = ?7;",
            params![
                contact.first.as_str(),
                contact.last.as_str(),
                contact.avatar.as_deref(),
                contact.twitter.as_deref(),
                contact.notes.as_deref(),
                bool_to_int(contact.favorite),
                contact.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(contact.id));
        }

        Ok(())
    }

    fn get_contact(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_contact_row(row)?));
        }

        Ok(None)
    }

    fn list_contacts(&self, query: &ContactListQuery) -> RepoResult<Vec<Contact>> {
        let clause = compile_filter(query.filter.as_deref());
        let sql = format!(
            "{CONTACT_SELECT_SQL} WHERE 1 = 1{} ORDER BY last ASC, created_at ASC, id ASC",
            clause.sql
        );
        let bind_values: Vec<Value> = clause.bind_values;

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn delete_contact(&self, id: ContactId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{id_text}` in contacts.id"))
    })?;

    let favorite = match row.get::<_, i64>("favorite")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid favorite value `{other}` in contacts.favorite"
            )));
        }
    };

    Ok(Contact {
        id,
        first: row.get("first")?,
        last: row.get("last")?,
        avatar: row.get("avatar")?,
        twitter: row.get("twitter")?,
        notes: row.get("notes")?,
        favorite,
        created_at: row.get("created_at")?,
    })
}

fn bool_to_int(value: bool) -> i64 {
    i64::from(value)
}
