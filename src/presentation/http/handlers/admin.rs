//! Admin Handlers
//!
//! Hit counter page, Prometheus scrape endpoint and the dev-only reset.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

use crate::application::services::UserService;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// File server hit counter
///
/// GET /admin/metrics
pub async fn metrics_page(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>"#,
        state.metrics.fileserver_hits()
    ))
}

/// Prometheus metrics endpoint
///
/// GET /metrics
pub async fn prometheus_metrics(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let body = state
        .metrics
        .gather()
        .map_err(|e| AppError::Internal(format!("Couldn't encode metrics: {}", e)))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}

/// Zero the hit counter and delete every user
///
/// POST /admin/reset
///
/// Only allowed when the platform is `dev`.
pub async fn reset(State(state): State<AppState>) -> Result<&'static str, AppError> {
    if !state.settings.is_dev() {
        tracing::warn!(platform = %state.settings.platform, "Reset refused outside dev");
        return Err(AppError::Forbidden(
            "Reset is only allowed in dev environment".into(),
        ));
    }

    state.metrics.reset_fileserver_hits();

    state
        .user_service()
        .delete_all()
        .await
        .map_err(|e| AppError::Internal(format!("Couldn't delete users: {}", e)))?;

    Ok("Hits reset to 0 and database reset to initial state.")
}
