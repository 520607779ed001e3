//! Child routes under `/contacts/:id`.

use super::root::load;
use super::{render_page, Redirect};
use crate::error::PageError;
use crate::state::AppState;
use crate::view::{ContactDetailView, EditFormView};
use axum::extract::rejection::FormRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use contacts_core::{ContactId, ContactPatch, ContactServiceError};
use log::info;
use serde::Deserialize;
use uuid::Uuid;

/// Body of the favorite toggle form.
#[derive(Debug, Deserialize)]
pub struct FavoriteForm {
    pub favorite: Option<String>,
}

impl FavoriteForm {
    /// Accepts exactly `"true"` or `"false"`.
    pub fn parse(&self) -> Result<bool, PageError> {
        match self.favorite.as_deref() {
            Some("true") => Ok(true),
            Some("false") => Ok(false),
            Some(other) => Err(PageError::BadRequest(format!(
                "favorite must be `true` or `false`, got `{other}`"
            ))),
            None => Err(PageError::BadRequest(
                "favorite field is missing".to_string(),
            )),
        }
    }
}

fn parse_contact_id(raw: &str) -> Result<ContactId, PageError> {
    Uuid::parse_str(raw).map_err(|_| PageError::NotFound(format!("`{raw}` is not a contact id")))
}

/// `GET /contacts/:id`
pub async fn show(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    RawQuery(raw_query): RawQuery,
    uri: Uri,
) -> Result<Html<String>, PageError> {
    let id = parse_contact_id(&raw_id)?;
    let (root, contact) = state.with_service(|service| {
        let root = load(service, raw_query.as_deref())?;
        Ok((root, service.require_contact(id)?))
    })?;

    let outlet = state
        .views()
        .render_contact(&ContactDetailView::from(&contact))?;
    render_page(&state, &root, uri.path(), &outlet)
}

/// `POST /contacts/:id` toggles the favorite flag.
pub async fn favorite(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    form: Result<Form<FavoriteForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    let id = parse_contact_id(&raw_id)?;
    let Form(form) = form.map_err(|rejection| PageError::BadRequest(rejection.body_text()))?;
    let favorite = form.parse()?;
    state.with_service(|service| Ok(service.set_favorite(id, favorite)?))?;
    Ok(Redirect::to(format!("/contacts/{id}")))
}

/// `GET /contacts/:id/edit`
pub async fn edit_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    RawQuery(raw_query): RawQuery,
    uri: Uri,
) -> Result<Html<String>, PageError> {
    let id = parse_contact_id(&raw_id)?;
    let (root, contact) = state.with_service(|service| {
        let root = load(service, raw_query.as_deref())?;
        Ok((root, service.require_contact(id)?))
    })?;

    let outlet = state.views().render_edit(&EditFormView::from(&contact))?;
    render_page(&state, &root, uri.path(), &outlet)
}

/// `POST /contacts/:id/edit`
///
/// Invalid input re-renders the form with `422` and the submitted values.
pub async fn edit_submit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    RawQuery(raw_query): RawQuery,
    uri: Uri,
    Form(patch): Form<ContactPatch>,
) -> Result<Response, PageError> {
    let id = parse_contact_id(&raw_id)?;
    let outcome = state.with_service(|service| {
        match service.update_contact(id, &patch) {
            Ok(_) => Ok(None),
            Err(ContactServiceError::Invalid(err)) => {
                let contact = service.require_contact(id)?;
                let root = load(service, raw_query.as_deref())?;
                Ok(Some((root, contact, err)))
            }
            Err(other) => Err(other.into()),
        }
    })?;

    let Some((root, contact, err)) = outcome else {
        return Ok(Redirect::to(format!("/contacts/{id}")).into_response());
    };

    info!("event=contact_update module=web status=rejected contact_id={id} reason={err}");
    let form = EditFormView::rejected(&contact, &patch, err.to_string());
    let outlet = state.views().render_edit(&form)?;
    let page = render_page(&state, &root, uri.path(), &outlet)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, page).into_response())
}

/// `POST /contacts/:id/destroy`
pub async fn destroy(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Redirect, PageError> {
    let id = parse_contact_id(&raw_id)?;
    state.with_service(|service| Ok(service.delete_contact(id)?))?;
    Ok(Redirect::to("/"))
}

#[cfg(test)]
mod tests {
    use super::FavoriteForm;
    use axum::http::StatusCode;

    fn form(value: Option<&str>) -> FavoriteForm {
        FavoriteForm {
            favorite: value.map(str::to_string),
        }
    }

    #[test]
    fn favorite_accepts_only_true_or_false() {
        assert!(form(Some("true")).parse().unwrap());
        assert!(!form(Some("false")).parse().unwrap());
    }

    #[test]
    fn other_or_missing_favorite_values_are_bad_requests() {
        for value in [Some("yes"), Some(""), Some("TRUE"), None] {
            let err = form(value).parse().unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }
}
