//! Authentication Service
//!
//! Registration, password login, session token issuance and the refresh
//! token lifecycle.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::JwtSettings;
use crate::domain::{RefreshToken, RefreshTokenRepository, User, UserRepository};
use crate::infrastructure::security::{self, refresh_token, session_token, TokenError};
use crate::shared::error::AppError;

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account
    async fn register(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Authenticate with credentials, issuing a session and a refresh token
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError>;

    /// Exchange a refresh token for a new session token
    async fn refresh(&self, refresh_token: &str) -> Result<String, AuthError>;

    /// Revoke a refresh token. Unknown and already-revoked tokens are a no-op.
    async fn revoke(&self, refresh_token: &str) -> Result<(), AuthError>;

    /// Validate a session token and extract the account ID
    fn validate_token(&self, access_token: &str) -> Result<uuid::Uuid, AuthError>;
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub user: User,
    /// Signed session token
    pub token: String,
    /// Opaque refresh token (returned once, stored hashed)
    pub refresh_token: String,
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Refresh token is unknown, expired or revoked")]
    InvalidRefreshToken,

    #[error("Email already exists")]
    EmailExists,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid | TokenError::InvalidSubject => AuthError::InvalidToken,
            TokenError::Signing(msg) => AuthError::Internal(msg),
        }
    }
}

/// AuthService implementation
pub struct AuthServiceImpl {
    user_repo: Arc<dyn UserRepository>,
    token_repo: Arc<dyn RefreshTokenRepository>,
    jwt_settings: JwtSettings,
}

impl AuthServiceImpl {
    /// Create a new AuthServiceImpl
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        token_repo: Arc<dyn RefreshTokenRepository>,
        jwt_settings: JwtSettings,
    ) -> Self {
        Self {
            user_repo,
            token_repo,
            jwt_settings,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let hashed_password =
            security::hash_password(password).map_err(|e| AuthError::Internal(e.to_string()))?;

        let user = User::new(email, hashed_password);

        let created = self.user_repo.create(&user).await.map_err(|e| match e {
            AppError::Conflict(_) => AuthError::EmailExists,
            e => AuthError::Internal(e.to_string()),
        })?;

        tracing::info!(user_id = %created.id, "Account registered");
        Ok(created)
    }

    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or_else(|| {
                tracing::debug!("Login for unknown email");
                AuthError::InvalidCredentials
            })?;

        // A corrupt stored hash is reported like a wrong password.
        match security::verify_password(password, &user.hashed_password) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!(user_id = %user.id, "Login with wrong password");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                tracing::warn!(user_id = %user.id, error = %e, "Stored password hash unusable");
                return Err(AuthError::InvalidCredentials);
            }
        }

        let token = session_token::issue(
            user.id,
            &self.jwt_settings.secret,
            self.jwt_settings.access_token_ttl(),
        )?;

        let raw_refresh = refresh_token::generate();
        let record = RefreshToken::new(
            user.id,
            refresh_token::hash(&raw_refresh),
            self.jwt_settings.refresh_token_ttl(),
        );
        self.token_repo
            .create(&record)
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User logged in");

        Ok(LoginOutcome {
            user,
            token,
            refresh_token: raw_refresh,
        })
    }

    async fn refresh(&self, raw_token: &str) -> Result<String, AuthError> {
        let record = self
            .token_repo
            .find_by_token_hash(&refresh_token::hash(raw_token))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?
            .ok_or(AuthError::InvalidRefreshToken)?;

        if !record.is_active() {
            tracing::debug!(user_id = %record.user_id, "Refresh with expired or revoked token");
            return Err(AuthError::InvalidRefreshToken);
        }

        let token = session_token::issue(
            record.user_id,
            &self.jwt_settings.secret,
            self.jwt_settings.access_token_ttl(),
        )?;

        Ok(token)
    }

    async fn revoke(&self, raw_token: &str) -> Result<(), AuthError> {
        let revoked = self
            .token_repo
            .revoke(&refresh_token::hash(raw_token))
            .await
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        if !revoked {
            tracing::debug!("Revoke of unknown or already revoked refresh token");
        }

        Ok(())
    }

    fn validate_token(&self, access_token: &str) -> Result<uuid::Uuid, AuthError> {
        Ok(session_token::validate(access_token, &self.jwt_settings.secret)?)
    }
}
