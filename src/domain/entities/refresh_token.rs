//! Refresh token entity and repository trait.
//!
//! Maps to the `refresh_tokens` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// A persisted refresh token.
///
/// Maps to the `refresh_tokens` table:
/// - token_hash: TEXT PRIMARY KEY (SHA-256 hex of the opaque token)
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - user_id: UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE
/// - expires_at: TIMESTAMPTZ NOT NULL
/// - revoked_at: TIMESTAMPTZ NULL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// SHA-256 hash of the token (never store raw tokens)
    #[serde(skip_serializing)]
    pub token_hash: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// User this token belongs to
    pub user_id: Uuid,

    /// When this token stops being accepted
    pub expires_at: DateTime<Utc>,

    /// When the token was revoked (None if active)
    pub revoked_at: Option<DateTime<Utc>>,
}

impl RefreshToken {
    /// Create a token record expiring `ttl` from now.
    pub fn new(user_id: Uuid, token_hash: String, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token_hash,
            created_at: now,
            updated_at: now,
            user_id,
            expires_at: now + ttl,
            revoked_at: None,
        }
    }

    /// Check if the token is currently usable (not expired, not revoked).
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    /// Check usability at a given instant.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.revoked_at.is_none() && self.expires_at > now
    }
}

/// Repository trait for refresh token storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RefreshTokenRepository: Send + Sync {
    /// Persist a new token.
    async fn create(&self, token: &RefreshToken) -> Result<RefreshToken, AppError>;

    /// Find a token by its hash, whatever its state.
    async fn find_by_token_hash(&self, token_hash: &str)
        -> Result<Option<RefreshToken>, AppError>;

    /// Set `revoked_at` if not already set.
    ///
    /// Returns `true` when this call revoked a live token, `false` when the
    /// token was unknown or already revoked.
    async fn revoke(&self, token_hash: &str) -> Result<bool, AppError>;
}
