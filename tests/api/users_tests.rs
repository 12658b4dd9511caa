//! Account API Tests

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::{bearer, json_body, unique_email, TestApp};

#[tokio::test]
async fn test_register_returns_account_without_password() {
    let app = TestApp::new();
    let email = unique_email();

    let response = app
        .post_json("/api/users", json!({ "email": email, "password": "04234" }))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["is_chirpy_red"], false);
    assert!(body["id"].as_str().is_some());
    assert!(body["created_at"].as_str().is_some());
    assert!(body["updated_at"].as_str().is_some());
    assert!(body.get("password").is_none());
    assert!(body.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = TestApp::new();
    let email = unique_email();
    app.register(&email, "04234").await;

    let response = app
        .post_json("/api/users", json!({ "email": email, "password": "other" }))
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_with_malformed_json_is_server_error() {
    let app = TestApp::new();

    let response = app.post_raw("/api/users", "{not json", None).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Couldn't decode parameters");
}

#[tokio::test]
async fn test_update_changes_credentials_of_token_holder() {
    let app = TestApp::new();
    let email = unique_email();
    let (user_id, token, _) = app.signup(&email, "04234").await;
    let new_email = unique_email();

    let response = app
        .request(
            Method::PUT,
            "/api/users",
            Some(json!({ "email": new_email, "password": "losPollosHermanos" })),
            Some(&bearer(&token)),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], user_id.to_string());
    assert_eq!(body["email"], new_email.as_str());

    // Old password no longer works, new one does
    let old = app
        .post_json("/api/login", json!({ "email": new_email, "password": "04234" }))
        .await;
    assert_eq!(old.status(), StatusCode::UNAUTHORIZED);
    app.login(&new_email, "losPollosHermanos").await;
}

#[tokio::test]
async fn test_update_ignores_other_identities_in_body() {
    let app = TestApp::new();
    let (victim_id, _, _) = app.signup(&unique_email(), "victim-pw").await;
    let (attacker_id, token, _) = app.signup(&unique_email(), "attacker-pw").await;

    let response = app
        .request(
            Method::PUT,
            "/api/users",
            Some(json!({ "id": victim_id, "email": unique_email(), "password": "x" })),
            Some(&bearer(&token)),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["id"], attacker_id.to_string());
    let victim = app.store.user(victim_id).unwrap();
    assert!(chirpy::infrastructure::security::verify_password("victim-pw", &victim.hashed_password).unwrap());
}

#[tokio::test]
async fn test_update_requires_valid_token() {
    let app = TestApp::new();
    let body = json!({ "email": unique_email(), "password": "x" });

    let missing = app
        .request(Method::PUT, "/api/users", Some(body.clone()), None)
        .await;
    let invalid = app
        .request(Method::PUT, "/api/users", Some(body), Some("Bearer not-a-jwt"))
        .await;

    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(invalid.status(), StatusCode::UNAUTHORIZED);
}
