//! Route handlers: loaders for GET pages, actions for form posts.
//!
//! Every page is the root shell with a child view in its detail outlet, so
//! each GET handler runs the root loader before its own.

pub mod contact;
pub mod root;

use crate::error::PageError;
use crate::navigation::NavigationState;
use crate::state::AppState;
use crate::view::ShellProps;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use root::RootData;

const STYLESHEET: &str = include_str!("../view/assets/app.css");

/// `302 Found` redirect issued by actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    location: String,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        (StatusCode::FOUND, [(header::LOCATION, self.location)]).into_response()
    }
}

/// Wraps `outlet` in the shell rendered from the root loader's data.
pub(crate) fn render_page(
    state: &AppState,
    root: &RootData,
    current_path: &str,
    outlet: &str,
) -> Result<Html<String>, PageError> {
    let navigation = NavigationState::idle();
    let props = ShellProps {
        contacts: &root.contacts,
        q: root.q.as_deref(),
        current_path,
        navigation: &navigation,
    };
    Ok(Html(state.views().render_shell(&props, outlet)?))
}

pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}

pub async fn not_found() -> PageError {
    PageError::NotFound("no page matches this address".to_string())
}
