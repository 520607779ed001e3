//! Per-request access logging.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::{info, warn};
use std::time::Instant;

/// Logs method, path, status and latency for every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let duration_ms = started_at.elapsed().as_millis();
    if response.status().is_server_error() {
        warn!("event=http_request module=web status={status} method={method} path={path} duration_ms={duration_ms}");
    } else {
        info!("event=http_request module=web status={status} method={method} path={path} duration_ms={duration_ms}");
    }
    response
}
