//! Polka Webhook Tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use test_case::test_case;
use uuid::Uuid;

use crate::common::{json_body, unique_email, TestApp, POLKA_KEY};

fn api_key() -> String {
    format!("ApiKey {}", POLKA_KEY)
}

#[tokio::test]
async fn test_upgrade_event_marks_user() {
    let app = TestApp::new();
    let (user_id, _, _) = app.signup(&unique_email(), "04234").await;

    let response = app
        .request(
            Method::POST,
            "/polka/webhooks",
            Some(json!({ "event": "user.upgraded", "data": { "user_id": user_id } })),
            Some(&api_key()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(app.store.user(user_id).unwrap().is_chirpy_red);

    let login = app.login(&app.store.user(user_id).unwrap().email, "04234").await;
    assert_eq!(login["is_chirpy_red"], true);
}

#[test_case(json!({ "event": "user.payment_failed", "data": { "user_id": "x" } }) ; "other event")]
#[test_case(json!({ "event": "user.downgraded" }) ; "no data")]
#[test_case(json!({ "data": 42 }) ; "no event")]
#[test_case(json!({ "event": "user.upgraded!", "data": [] }) ; "near miss")]
#[test_case(json!({ "event": 5 }) ; "numeric event")]
#[test_case(json!({ "event": null, "data": { "user_id": "x" } }) ; "null event")]
#[test_case(json!([1, 2]) ; "array payload")]
#[test_case(json!("user.upgraded") ; "string payload")]
#[tokio::test]
async fn test_other_events_are_ignored(payload: serde_json::Value) {
    let app = TestApp::new();
    let (user_id, _, _) = app.signup(&unique_email(), "04234").await;

    let response = app
        .request(Method::POST, "/polka/webhooks", Some(payload), Some(&api_key()))
        .await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!app.store.user(user_id).unwrap().is_chirpy_red);
}

#[tokio::test]
async fn test_body_is_decoded_without_content_type() {
    let app = TestApp::new();
    let (user_id, _, _) = app.signup(&unique_email(), "04234").await;

    let ignored = app
        .post_untyped(
            "/polka/webhooks",
            r#"{"event":"user.payment_failed"}"#,
            Some(&api_key()),
        )
        .await;
    assert_eq!(ignored.status(), StatusCode::NO_CONTENT);

    let upgraded = app
        .post_untyped(
            "/polka/webhooks",
            &json!({ "event": "user.upgraded", "data": { "user_id": user_id } }).to_string(),
            Some(&api_key()),
        )
        .await;
    assert_eq!(upgraded.status(), StatusCode::NO_CONTENT);
    assert!(app.store.user(user_id).unwrap().is_chirpy_red);
}

#[tokio::test]
async fn test_malformed_json_is_decode_error() {
    let app = TestApp::new();

    let response = app
        .post_raw("/polka/webhooks", "{not json", Some(&api_key()))
        .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["error"], "Couldn't decode parameters");
}

#[tokio::test]
async fn test_upgrade_without_user_id_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::POST,
            "/polka/webhooks",
            Some(json!({ "event": "user.upgraded" })),
            Some(&api_key()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::POST,
            "/polka/webhooks",
            Some(json!({ "event": "user.upgraded", "data": { "user_id": Uuid::new_v4() } })),
            Some(&api_key()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_user_id_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .request(
            Method::POST,
            "/polka/webhooks",
            Some(json!({ "event": "user.upgraded", "data": { "user_id": "nope" } })),
            Some(&api_key()),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_api_key_is_checked_before_body() {
    let app = TestApp::new();

    let missing = app.post_raw("/polka/webhooks", "{not json", None).await;
    let wrong = app
        .post_raw("/polka/webhooks", "{not json", Some("ApiKey wrong"))
        .await;
    let bearer = app
        .post_raw(
            "/polka/webhooks",
            "{not json",
            Some(&format!("Bearer {}", POLKA_KEY)),
        )
        .await;

    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(bearer.status(), StatusCode::UNAUTHORIZED);
}
