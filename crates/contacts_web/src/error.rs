//! Page-level failures and the generic error boundary.
//!
//! # Invariants
//! - A failed request renders only the boundary page, never a partial shell.
//! - Internal error details are logged, not shown.

use crate::view::ViewError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use contacts_core::{ContactId, ContactServiceError};
use log::{error, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum PageError {
    /// Unknown route, unparseable contact id, or missing contact.
    NotFound(String),
    /// Malformed form submission.
    BadRequest(String),
    /// Contact store failed or returned inconsistent data.
    Store(ContactServiceError),
    /// The shared store handle is unusable after a panic.
    StoreUnavailable,
    View(ViewError),
}

impl PageError {
    pub fn contact_not_found(id: ContactId) -> Self {
        Self::NotFound(format!("contact {id} does not exist"))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) | Self::StoreUnavailable | Self::View(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl Display for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(message) => write!(f, "not found: {message}"),
            Self::BadRequest(message) => write!(f, "bad request: {message}"),
            Self::Store(err) => write!(f, "contact store error: {err}"),
            Self::StoreUnavailable => write!(f, "contact store lock poisoned"),
            Self::View(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::View(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContactServiceError> for PageError {
    fn from(value: ContactServiceError) -> Self {
        match value {
            ContactServiceError::ContactNotFound(id) => Self::contact_not_found(id),
            other => Self::Store(other),
        }
    }
}

impl From<ViewError> for PageError {
    fn from(value: ViewError) -> Self {
        Self::View(value)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::NotFound(message) => {
                warn!("event=page_error module=web status=not_found error={self}");
                message.clone()
            }
            Self::BadRequest(message) => {
                warn!("event=page_error module=web status=bad_request error={self}");
                message.clone()
            }
            _ => {
                error!("event=page_error module=web status=error error={self}");
                "Something went wrong while loading this page.".to_string()
            }
        };
        (status, Html(error_boundary(status, &message))).into_response()
    }
}

fn error_boundary(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n    <meta charset=\"utf-8\" />\n    <title>Oops!</title>\n    <link rel=\"stylesheet\" href=\"/app.css\" />\n  </head>\n  <body>\n    <div id=\"error-page\">\n      <h1>Oops!</h1>\n      <p>{} {}</p>\n      <p><i>{}</i></p>\n      <p><a href=\"/\">Back to contacts</a></p>\n    </div>\n  </body>\n</html>\n",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        handlebars::html_escape(message)
    )
}

#[cfg(test)]
mod tests {
    use super::PageError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use contacts_core::{ContactServiceError, RepoError};
    use uuid::Uuid;

    #[test]
    fn service_not_found_maps_to_404() {
        let err = PageError::from(ContactServiceError::ContactNotFound(Uuid::new_v4()));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_failures_map_to_500() {
        let err = PageError::from(ContactServiceError::Repo(RepoError::InvalidData(
            "bad row".to_string(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
