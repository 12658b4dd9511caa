//! Refresh Token Repository Implementation
//!
//! Tokens are keyed by the SHA-256 digest of the opaque value.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{RefreshToken, RefreshTokenRepository};
use crate::shared::error::AppError;

#[derive(Debug, sqlx::FromRow)]
struct RefreshTokenRow {
    token_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    user_id: Uuid,
    expires_at: DateTime<Utc>,
    revoked_at: Option<DateTime<Utc>>,
}

impl From<RefreshTokenRow> for RefreshToken {
    fn from(row: RefreshTokenRow) -> Self {
        RefreshToken {
            token_hash: row.token_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
            user_id: row.user_id,
            expires_at: row.expires_at,
            revoked_at: row.revoked_at,
        }
    }
}

/// PostgreSQL refresh token repository implementation.
#[derive(Clone)]
pub struct PgRefreshTokenRepository {
    pool: PgPool,
}

impl PgRefreshTokenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RefreshTokenRepository for PgRefreshTokenRepository {
    async fn create(&self, token: &RefreshToken) -> Result<RefreshToken, AppError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            INSERT INTO refresh_tokens (token_hash, created_at, updated_at, user_id, expires_at, revoked_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING token_hash, created_at, updated_at, user_id, expires_at, revoked_at
            "#,
        )
        .bind(&token.token_hash)
        .bind(token.created_at)
        .bind(token.updated_at)
        .bind(token.user_id)
        .bind(token.expires_at)
        .bind(token.revoked_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<RefreshToken>, AppError> {
        let row = sqlx::query_as::<_, RefreshTokenRow>(
            r#"
            SELECT token_hash, created_at, updated_at, user_id, expires_at, revoked_at
            FROM refresh_tokens
            WHERE token_hash = $1
            "#,
        )
        .bind(token_hash)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(RefreshToken::from))
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, AppError> {
        // First revocation wins; repeat calls leave revoked_at untouched.
        let result = sqlx::query(
            r#"
            UPDATE refresh_tokens
            SET revoked_at = NOW(), updated_at = NOW()
            WHERE token_hash = $1 AND revoked_at IS NULL
            "#,
        )
        .bind(token_hash)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
