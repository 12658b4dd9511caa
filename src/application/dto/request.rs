//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;

/// Registration request
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Update user request
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,
    pub password: String,
}

/// Create chirp request
///
/// The length limit is enforced by the chirp service.
#[derive(Debug, Deserialize)]
pub struct CreateChirpRequest {
    pub body: String,
}

/// Query string for `GET /api/chirps`
#[derive(Debug, Default, Deserialize)]
pub struct ChirpListQuery {
    /// Raw author identifier; parsed by the handler so a malformed value is a 400
    pub author_id: Option<String>,
    pub sort: Option<String>,
}

/// `data` of a `user.upgraded` event
#[derive(Debug, Deserialize)]
pub struct UpgradeData {
    pub user_id: String,
}
