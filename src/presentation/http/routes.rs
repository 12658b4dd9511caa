//! Route Configuration
//!
//! Configures all HTTP routes.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use super::handlers;
use crate::presentation::middleware::count_file_hits;
use crate::startup::AppState;

/// Create the main router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .nest("/admin", admin_routes())
        .route("/polka/webhooks", post(handlers::webhooks::polka_webhook))
        // Prometheus metrics endpoint
        .route("/metrics", get(handlers::admin::prometheus_metrics))
        .merge(file_server(state.clone()))
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(handlers::health::readiness))
        .route(
            "/users",
            post(handlers::users::create_user).put(handlers::users::update_user),
        )
        .route("/login", post(handlers::auth::login))
        .route("/refresh", post(handlers::auth::refresh))
        .route("/revoke", post(handlers::auth::revoke))
        .route(
            "/chirps",
            get(handlers::chirps::list_chirps).post(handlers::chirps::create_chirp),
        )
        .route(
            "/chirps/{chirp_id}",
            get(handlers::chirps::get_chirp).delete(handlers::chirps::delete_chirp),
        )
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(handlers::admin::metrics_page))
        .route("/reset", post(handlers::admin::reset))
}

/// Static files under `/app/`, each request counted.
fn file_server(state: AppState) -> Router<AppState> {
    let root = state.settings.fileserver.root.clone();

    Router::new()
        .nest_service("/app", ServeDir::new(root))
        .layer(middleware::from_fn_with_state(state, count_file_hits))
}
