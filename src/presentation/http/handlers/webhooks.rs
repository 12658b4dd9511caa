//! Webhook Handlers

use axum::{extract::State, http::StatusCode};
use serde_json::Value;
use uuid::Uuid;

use crate::application::dto::request::UpgradeData;
use crate::application::services::{WebhookError, WebhookService, USER_UPGRADED};
use crate::presentation::http::extractors::{AppJson, PolkaAuth};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Polka payment events
///
/// POST /polka/webhooks
///
/// The API key is checked before the body is read. Any JSON payload whose
/// `event` is not `user.upgraded` is acknowledged and ignored.
pub async fn polka_webhook(
    State(state): State<AppState>,
    _auth: PolkaAuth,
    AppJson(body): AppJson<Value>,
) -> Result<StatusCode, AppError> {
    let event = body.get("event").and_then(Value::as_str);
    if event != Some(USER_UPGRADED) {
        tracing::debug!(?event, "Ignoring webhook event");
        return Ok(StatusCode::NO_CONTENT);
    }

    let data = body.get("data").cloned().unwrap_or(Value::Null);
    let data: UpgradeData = serde_json::from_value(data)
        .map_err(|_| AppError::BadRequest("Missing user_id".into()))?;
    let user_id = Uuid::parse_str(&data.user_id)
        .map_err(|_| AppError::BadRequest("Couldn't parse user UUID".into()))?;

    state
        .webhook_service()
        .upgrade_user(user_id)
        .await
        .map_err(|e| match e {
            WebhookError::UserNotFound => AppError::NotFound("User not found".into()),
            WebhookError::Internal(msg) => {
                AppError::Internal(format!("Couldn't upgrade user to Chirpy Red: {}", msg))
            }
        })?;

    Ok(StatusCode::NO_CONTENT)
}
