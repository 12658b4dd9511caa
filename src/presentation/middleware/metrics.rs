//! Request counting middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::startup::AppState;

/// Count a static file server hit, then serve the file.
pub async fn count_file_hits(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    state.metrics.record_fileserver_hit();
    next.run(request).await
}

/// Record every request by method and final status.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let response = next.run(request).await;

    state
        .metrics
        .record_http_request(method.as_str(), response.status().as_u16());

    response
}
