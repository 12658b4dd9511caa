//! Admin API Tests

use axum::http::{header, Method, StatusCode};

use crate::common::{body_text, unique_email, TestApp};

#[tokio::test]
async fn test_metrics_page_counts_file_server_hits() {
    let app = TestApp::new();
    app.get("/app/index.html").await;
    app.get("/app/").await;
    // API traffic is not counted
    app.get("/api/healthz").await;

    let response = app.get("/admin/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    let html = body_text(response).await;
    assert!(html.contains("Welcome, Chirpy Admin"));
    assert!(html.contains("Chirpy has been visited 2 times!"));
}

#[tokio::test]
async fn test_reset_in_dev_clears_users_and_hits() {
    let app = TestApp::new();
    let email = unique_email();
    let (user_id, token, _) = app.signup(&email, "04234").await;
    app.post_chirp(&token, "soon gone").await;
    app.get("/app/index.html").await;

    let response = app.request(Method::POST, "/admin/reset", None, None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(app.state.metrics.fileserver_hits(), 0);
    assert!(app.store.user(user_id).is_none());
    assert_eq!(app.store.chirp_count(), 0);

    // The email can be registered again
    app.register(&email, "04234").await;
}

#[tokio::test]
async fn test_reset_outside_dev_is_forbidden() {
    let app = TestApp::with_platform("production");
    let (user_id, _, _) = app.signup(&unique_email(), "04234").await;
    app.get("/app/index.html").await;

    let response = app.request(Method::POST, "/admin/reset", None, None).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert!(app.store.user(user_id).is_some());
    assert_eq!(app.state.metrics.fileserver_hits(), 1);
}
