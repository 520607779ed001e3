//! Root route: the contact list loader and the "New" action.

use super::{render_page, Redirect};
use crate::error::PageError;
use crate::query::search_param;
use crate::state::AppState;
use axum::extract::{RawQuery, State};
use axum::http::Uri;
use axum::response::Html;
use contacts_core::{Contact, ContactRepository, ContactService, ServiceResult};
use serde::Serialize;

/// Data the shell renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootData {
    pub contacts: Vec<Contact>,
    /// Search term exactly as it appeared in the URL; `None` when absent.
    pub q: Option<String>,
}

/// Reads `q` from the request query and lists the matching contacts.
///
/// Store failures propagate; a malformed `q` is treated as absent.
pub fn load<R: ContactRepository>(
    service: &ContactService<R>,
    raw_query: Option<&str>,
) -> ServiceResult<RootData> {
    let q = search_param(raw_query);
    let contacts = service.list_contacts(q.as_deref())?;
    Ok(RootData { contacts, q })
}

/// Creates a blank contact and points the browser at its edit form.
pub fn create<R: ContactRepository>(service: &ContactService<R>) -> ServiceResult<Redirect> {
    let contact = service.create_empty_contact()?;
    Ok(Redirect::to(format!("/contacts/{}/edit", contact.id)))
}

/// `GET /`
pub async fn index(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
    uri: Uri,
) -> Result<Html<String>, PageError> {
    let root = state.with_service(|service| Ok(load(service, raw_query.as_deref())?))?;
    let outlet = state.views().render_index()?;
    render_page(&state, &root, uri.path(), &outlet)
}

/// `POST /`
pub async fn new_contact(State(state): State<AppState>) -> Result<Redirect, PageError> {
    state.with_service(|service| Ok(create(service)?))
}
