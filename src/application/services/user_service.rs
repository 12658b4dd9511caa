//! User Service
//!
//! Account updates and the administrative wipe.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{User, UserRepository};
use crate::infrastructure::security;
use crate::shared::error::AppError;

/// User service trait
#[async_trait]
pub trait UserService: Send + Sync {
    /// Replace the email and password of `user_id`
    async fn update_credentials(
        &self,
        user_id: Uuid,
        email: &str,
        password: &str,
    ) -> Result<User, UserError>;

    /// Delete every account, returning how many were removed
    async fn delete_all(&self) -> Result<u64, UserError>;
}

/// User service errors
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("User not found")]
    NotFound,

    #[error("Email already exists")]
    EmailExists,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// UserService implementation
pub struct UserServiceImpl {
    user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn update_credentials(
        &self,
        user_id: Uuid,
        email: &str,
        password: &str,
    ) -> Result<User, UserError> {
        let hashed_password =
            security::hash_password(password).map_err(|e| UserError::Internal(e.to_string()))?;

        self.user_repo
            .update_credentials(user_id, email, &hashed_password)
            .await
            .map_err(|e| match e {
                AppError::NotFound(_) => UserError::NotFound,
                AppError::Conflict(_) => UserError::EmailExists,
                e => UserError::Internal(e.to_string()),
            })
    }

    async fn delete_all(&self) -> Result<u64, UserError> {
        let deleted = self
            .user_repo
            .delete_all()
            .await
            .map_err(|e| UserError::Internal(e.to_string()))?;

        tracing::warn!(deleted, "All users deleted");
        Ok(deleted)
    }
}
