//! Chirp Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::application::dto::request::{ChirpListQuery, CreateChirpRequest};
use crate::application::dto::response::ChirpResponse;
use crate::application::services::{ChirpError, ChirpService};
use crate::domain::SortOrder;
use crate::presentation::http::extractors::{AppJson, AuthUser};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Helper to convert ChirpError to AppError
fn map_chirp_error(e: ChirpError) -> AppError {
    match e {
        ChirpError::NotFound => AppError::NotFound("Chirp not found".into()),
        ChirpError::TooLong => AppError::Validation("Chirp is too long".into()),
        ChirpError::Forbidden => AppError::Forbidden(
            "You can't delete a chirp that was created by someone else".into(),
        ),
        ChirpError::Internal(msg) => AppError::Internal(msg),
    }
}

fn parse_id(raw: &str, what: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid {}", what)))
}

/// Post a chirp
///
/// POST /api/chirps
pub async fn create_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(body): AppJson<CreateChirpRequest>,
) -> Result<(StatusCode, Json<ChirpResponse>), AppError> {
    let chirp = state
        .chirp_service()
        .create_chirp(auth.user_id, &body.body)
        .await
        .map_err(map_chirp_error)?;

    Ok((StatusCode::CREATED, Json(chirp.into())))
}

/// List chirps
///
/// GET /api/chirps?author_id=<uuid>&sort=asc|desc
///
/// Unrecognised `sort` values keep the store order.
pub async fn list_chirps(
    State(state): State<AppState>,
    Query(query): Query<ChirpListQuery>,
) -> Result<Json<Vec<ChirpResponse>>, AppError> {
    let author_id = query
        .author_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| parse_id(s, "author ID"))
        .transpose()?;

    let sort = query
        .sort
        .as_deref()
        .map(|s| s.parse::<SortOrder>().unwrap_or_default())
        .unwrap_or_default();

    let chirps = state
        .chirp_service()
        .list_chirps(author_id, sort)
        .await
        .map_err(map_chirp_error)?;

    Ok(Json(chirps.into_iter().map(ChirpResponse::from).collect()))
}

/// Get one chirp
///
/// GET /api/chirps/{chirp_id}
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<ChirpResponse>, AppError> {
    let chirp_id = parse_id(&chirp_id, "chirp ID")?;

    let chirp = state
        .chirp_service()
        .get_chirp(chirp_id)
        .await
        .map_err(map_chirp_error)?;

    Ok(Json(chirp.into()))
}

/// Delete one of the caller's chirps
///
/// DELETE /api/chirps/{chirp_id}
pub async fn delete_chirp(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(chirp_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let chirp_id = parse_id(&chirp_id, "chirp ID")?;

    state
        .chirp_service()
        .delete_chirp(chirp_id, auth.user_id)
        .await
        .map_err(map_chirp_error)?;

    Ok(StatusCode::NO_CONTENT)
}
