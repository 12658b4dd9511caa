//! Custom Extractors
//!
//! Credential parsing and request body extraction.
//!
//! Header parsing is kept separate from credential validation: the
//! `bearer_token` and `api_key` functions only strip their scheme prefix, and
//! a value without the expected prefix is passed through unchanged so that
//! validation rejects it downstream.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::application::services::{AuthError, AuthService};
use crate::shared::error::AppError;
use crate::startup::AppState;

const BEARER_PREFIX: &str = "Bearer ";
const API_KEY_PREFIX: &str = "ApiKey ";

/// Read the `Authorization` header and strip `prefix` if present.
fn authorization_credential<'a>(
    headers: &'a HeaderMap,
    prefix: &str,
    missing: &str,
) -> Result<&'a str, AppError> {
    let value = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized(missing.to_string()))?;

    Ok(value.strip_prefix(prefix).unwrap_or(value))
}

/// Extract a bearer credential (session or refresh token).
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    authorization_credential(
        headers,
        BEARER_PREFIX,
        "Couldn't get token from request headers",
    )
}

/// Extract an `ApiKey` credential.
pub fn api_key(headers: &HeaderMap) -> Result<&str, AppError> {
    authorization_credential(
        headers,
        API_KEY_PREFIX,
        "Couldn't get API Key from request headers",
    )
}

/// Authenticated account, taken from a valid session token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;

        let user_id = state
            .auth_service()
            .validate_token(token)
            .map_err(|e| {
                tracing::debug!(error = %e, "Session token rejected");
                match e {
                    AuthError::TokenExpired => AppError::Unauthorized("Token expired".into()),
                    AuthError::Internal(msg) => AppError::Internal(msg),
                    _ => AppError::Unauthorized("Invalid access token".into()),
                }
            })?;

        Ok(AuthUser { user_id })
    }
}

/// Request carrying the configured Polka API key.
#[derive(Debug, Clone, Copy)]
pub struct PolkaAuth;

impl FromRequestParts<AppState> for PolkaAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = api_key(&parts.headers)?;

        if key != state.settings.polka.api_key {
            tracing::warn!("Webhook with invalid API key");
            return Err(AppError::Unauthorized("Invalid Polka API key".into()));
        }

        Ok(PolkaAuth)
    }
}

/// JSON body extractor whose rejection renders as an `AppError`.
///
/// The body is decoded whatever its `Content-Type`.
#[derive(Debug)]
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::Decode(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(AppJson)
            .map_err(|e| AppError::Decode(e.to_string()))
    }
}
