//! Webhook Service
//!
//! Applies payment-provider events to accounts.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::UserRepository;
use crate::shared::error::AppError;

/// The only event that mutates state.
pub const USER_UPGRADED: &str = "user.upgraded";

/// Webhook service trait
#[async_trait]
pub trait WebhookService: Send + Sync {
    /// Upgrade `user_id` to Chirpy Red
    async fn upgrade_user(&self, user_id: Uuid) -> Result<(), WebhookError>;
}

/// Webhook errors
#[derive(Debug, thiserror::Error)]
pub enum WebhookError {
    #[error("User not found")]
    UserNotFound,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// WebhookService implementation
pub struct WebhookServiceImpl {
    user_repo: Arc<dyn UserRepository>,
}

impl WebhookServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl WebhookService for WebhookServiceImpl {
    async fn upgrade_user(&self, user_id: Uuid) -> Result<(), WebhookError> {
        self.user_repo
            .find_by_id(user_id)
            .await
            .map_err(|e| WebhookError::Internal(e.to_string()))?
            .ok_or(WebhookError::UserNotFound)?;

        self.user_repo.upgrade(user_id).await.map_err(|e| match e {
            AppError::NotFound(_) => WebhookError::UserNotFound,
            e => WebhookError::Internal(e.to_string()),
        })?;

        tracing::info!(%user_id, "User upgraded to Chirpy Red");
        Ok(())
    }
}
