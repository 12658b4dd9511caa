//! User Handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::request::{RegisterRequest, UpdateUserRequest};
use crate::application::dto::response::UserResponse;
use crate::application::services::{AuthError, AuthService, UserError, UserService};
use crate::presentation::http::extractors::{AppJson, AuthUser};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new account
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(body): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .auth_service()
        .register(&body.email, &body.password)
        .await
        .map_err(|e| match e {
            AuthError::EmailExists => AppError::Conflict("Email already exists".into()),
            e => AppError::Internal(format!("Couldn't create user: {}", e)),
        })?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Change the caller's email and password
///
/// PUT /api/users
///
/// The account is always the one named by the session token.
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(body): AppJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .user_service()
        .update_credentials(auth.user_id, &body.email, &body.password)
        .await
        .map_err(|e| match e {
            UserError::NotFound => AppError::NotFound("User not found".into()),
            UserError::EmailExists => AppError::Conflict("Email already exists".into()),
            UserError::Internal(msg) => AppError::Internal(format!("Couldn't update user: {}", msg)),
        })?;

    Ok(Json(user.into()))
}
