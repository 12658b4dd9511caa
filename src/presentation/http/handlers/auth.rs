//! Authentication Handlers

use axum::{extract::State, http::HeaderMap, http::StatusCode, Json};

use crate::application::dto::request::LoginRequest;
use crate::application::dto::response::{LoginResponse, TokenResponse};
use crate::application::services::{AuthError, AuthService};
use crate::presentation::http::extractors::{bearer_token, AppJson};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Login with credentials
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(body): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let outcome = state
        .auth_service()
        .login(&body.email, &body.password)
        .await
        .map_err(|e| match e {
            AuthError::InvalidCredentials => {
                AppError::Unauthorized("Incorrect email or password".into())
            }
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(outcome.into()))
}

/// Mint a new session token from a refresh token
///
/// POST /api/refresh
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenResponse>, AppError> {
    let refresh_token = bearer_token(&headers)?;

    let token = state
        .auth_service()
        .refresh(refresh_token)
        .await
        .map_err(|e| match e {
            AuthError::InvalidRefreshToken => {
                AppError::Unauthorized("Token doesn't exist or has expired".into())
            }
            e => AppError::Internal(e.to_string()),
        })?;

    Ok(Json(TokenResponse { token }))
}

/// Revoke a refresh token
///
/// POST /api/revoke
pub async fn revoke(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, AppError> {
    let refresh_token = bearer_token(&headers)?;

    state
        .auth_service()
        .revoke(refresh_token)
        .await
        .map_err(|e| AppError::Internal(format!("Couldn't revoke token: {}", e)))?;

    Ok(StatusCode::NO_CONTENT)
}
