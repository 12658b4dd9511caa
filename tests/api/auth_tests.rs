//! Authentication API Tests

use axum::http::{Method, StatusCode};
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use chirpy::domain::RefreshToken;
use chirpy::infrastructure::security::{refresh_token, session_token};

use crate::common::{bearer, json_body, unique_email, TestApp, JWT_SECRET};

#[tokio::test]
async fn test_login_returns_account_and_tokens() {
    let app = TestApp::new();
    let email = unique_email();
    let registered = app.register(&email, "04234").await;

    let body = app.login(&email, "04234").await;

    assert_eq!(body["id"], registered["id"]);
    assert_eq!(body["email"], email.as_str());
    assert_eq!(body["is_chirpy_red"], false);
    assert_eq!(body["refresh_token"].as_str().unwrap().len(), 64);

    let token = body["token"].as_str().unwrap();
    let subject = session_token::validate(token, JWT_SECRET).unwrap();
    assert_eq!(subject.to_string(), registered["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_login_failures_share_one_message() {
    let app = TestApp::new();
    let email = unique_email();
    app.register(&email, "04234").await;

    let wrong_password = app
        .post_json("/api/login", json!({ "email": email, "password": "nope" }))
        .await;
    let unknown_email = app
        .post_json(
            "/api/login",
            json!({ "email": unique_email(), "password": "04234" }),
        )
        .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    let a = json_body(wrong_password).await;
    let b = json_body(unknown_email).await;
    assert_eq!(a, b);
    assert_eq!(a["error"], "Incorrect email or password");
}

#[tokio::test]
async fn test_refresh_issues_new_session_token() {
    let app = TestApp::new();
    let (user_id, _, refresh) = app.signup(&unique_email(), "04234").await;

    let response = app
        .request(Method::POST, "/api/refresh", None, Some(&bearer(&refresh)))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    let token = body["token"].as_str().unwrap();
    assert_eq!(session_token::validate(token, JWT_SECRET).unwrap(), user_id);
}

#[tokio::test]
async fn test_refresh_does_not_rotate_token() {
    let app = TestApp::new();
    let (_, _, refresh) = app.signup(&unique_email(), "04234").await;

    for _ in 0..2 {
        let response = app
            .request(Method::POST, "/api/refresh", None, Some(&bearer(&refresh)))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}

#[tokio::test]
async fn test_refresh_rejects_session_token_and_unknown_token() {
    let app = TestApp::new();
    let (_, session, _) = app.signup(&unique_email(), "04234").await;

    let with_session = app
        .request(Method::POST, "/api/refresh", None, Some(&bearer(&session)))
        .await;
    let with_unknown = app
        .request(
            Method::POST,
            "/api/refresh",
            None,
            Some(&bearer(&refresh_token::generate())),
        )
        .await;
    let without = app.request(Method::POST, "/api/refresh", None, None).await;

    assert_eq!(with_session.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(with_unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(without.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_rejects_expired_token() {
    let app = TestApp::new();
    let (user_id, _, _) = app.signup(&unique_email(), "04234").await;

    let raw = refresh_token::generate();
    app.store.insert_refresh_token(RefreshToken::new(
        user_id,
        refresh_token::hash(&raw),
        Duration::seconds(-1),
    ));

    let response = app
        .request(Method::POST, "/api/refresh", None, Some(&bearer(&raw)))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_revoke_twice_then_refresh_fails() {
    let app = TestApp::new();
    let (_, _, refresh) = app.signup(&unique_email(), "04234").await;
    let auth = bearer(&refresh);

    let first = app
        .request(Method::POST, "/api/revoke", None, Some(&auth))
        .await;
    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    let revoked_at = app
        .store
        .refresh_token(&refresh_token::hash(&refresh))
        .and_then(|t| t.revoked_at)
        .unwrap();

    let second = app
        .request(Method::POST, "/api/revoke", None, Some(&auth))
        .await;
    assert_eq!(second.status(), StatusCode::NO_CONTENT);

    // First revocation timestamp is kept
    let still = app
        .store
        .refresh_token(&refresh_token::hash(&refresh))
        .and_then(|t| t.revoked_at)
        .unwrap();
    assert_eq!(still, revoked_at);
    assert!(still <= Utc::now());

    let refresh_after = app
        .request(Method::POST, "/api/refresh", None, Some(&auth))
        .await;
    assert_eq!(refresh_after.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_revoke_unknown_token_is_no_content() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::POST,
            "/api/revoke",
            None,
            Some(&bearer(&Uuid::new_v4().to_string())),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_revoke_without_header_is_unauthorized() {
    let app = TestApp::new();

    let response = app.request(Method::POST, "/api/revoke", None, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_token_survives_revoke() {
    let app = TestApp::new();
    let (_, session, refresh) = app.signup(&unique_email(), "04234").await;

    app.request(Method::POST, "/api/revoke", None, Some(&bearer(&refresh)))
        .await;

    let response = app.post_chirp(&session, "still here").await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_expired_session_token_is_rejected() {
    let app = TestApp::new();
    let (user_id, _, _) = app.signup(&unique_email(), "04234").await;
    let expired = session_token::issue(user_id, JWT_SECRET, Duration::seconds(-10)).unwrap();

    let response = app.post_chirp(&expired, "hello").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["error"], "Token expired");
    assert_eq!(app.store.chirp_count(), 0);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = TestApp::new();
    let (user_id, _, _) = app.signup(&unique_email(), "04234").await;
    let forged = session_token::issue(
        user_id,
        "a-completely-different-signing-secret",
        Duration::hours(1),
    )
    .unwrap();

    let response = app.post_chirp(&forged, "hello").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(json_body(response).await["error"], "Invalid access token");
}
