//! Shared application state handed to every handler.

use crate::error::PageError;
use crate::view::{ViewResult, Views};
use contacts_core::{ContactService, SqliteContactRepository};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
    views: Arc<Views>,
}

impl AppState {
    /// Takes ownership of a migrated connection and compiles the views.
    pub fn new(conn: Connection) -> ViewResult<Self> {
        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
            views: Arc::new(Views::new()?),
        })
    }

    pub fn views(&self) -> &Views {
        &self.views
    }

    /// Runs `f` against a contact service bound to the shared connection.
    ///
    /// The lock is held only for the duration of `f`; never call this
    /// across an `.await`.
    pub fn with_service<T>(
        &self,
        f: impl FnOnce(&ContactService<SqliteContactRepository<'_>>) -> Result<T, PageError>,
    ) -> Result<T, PageError> {
        let conn = self.db.lock().map_err(|_| PageError::StoreUnavailable)?;
        let service = ContactService::new(SqliteContactRepository::new(&conn));
        f(&service)
    }
}
