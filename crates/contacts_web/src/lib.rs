//! HTTP surface of the contacts app: routing, pages and configuration.

pub mod config;
pub mod error;
pub mod navigation;
pub mod query;
pub mod request_log;
pub mod route;
pub mod state;
pub mod view;

pub use config::{ConfigError, ServerConfig};
pub use error::PageError;
pub use state::AppState;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;

/// Builds the full application router over `state`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(route::root::index).post(route::root::new_contact))
        .route(
            "/contacts/:id",
            get(route::contact::show).post(route::contact::favorite),
        )
        .route(
            "/contacts/:id/edit",
            get(route::contact::edit_form).post(route::contact::edit_submit),
        )
        .route("/contacts/:id/destroy", post(route::contact::destroy))
        .route("/app.css", get(route::stylesheet))
        .fallback(route::not_found)
        .layer(middleware::from_fn(request_log::log_requests))
        .with_state(state)
}
