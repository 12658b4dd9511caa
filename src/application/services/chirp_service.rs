//! Chirp Service
//!
//! Posting, listing and deleting chirps.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Chirp, ChirpRepository, SortOrder, MAX_CHIRP_LENGTH};
use crate::shared::content_filter;
use crate::shared::error::AppError;

/// Chirp service trait
#[async_trait]
pub trait ChirpService: Send + Sync {
    /// Post a chirp as `author_id`. The stored body is censored.
    async fn create_chirp(&self, author_id: Uuid, body: &str) -> Result<Chirp, ChirpError>;

    /// List chirps, optionally filtered to one author
    async fn list_chirps(
        &self,
        author_id: Option<Uuid>,
        sort: SortOrder,
    ) -> Result<Vec<Chirp>, ChirpError>;

    /// Get a single chirp
    async fn get_chirp(&self, chirp_id: Uuid) -> Result<Chirp, ChirpError>;

    /// Delete a chirp owned by `actor_id`
    async fn delete_chirp(&self, chirp_id: Uuid, actor_id: Uuid) -> Result<(), ChirpError>;
}

/// Chirp service errors
#[derive(Debug, thiserror::Error)]
pub enum ChirpError {
    #[error("Chirp not found")]
    NotFound,

    #[error("Chirp is too long")]
    TooLong,

    #[error("Permission denied")]
    Forbidden,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Length of a body as counted against the limit.
fn chirp_length(body: &str) -> usize {
    body.trim().chars().count()
}

/// ChirpService implementation
pub struct ChirpServiceImpl {
    chirp_repo: Arc<dyn ChirpRepository>,
}

impl ChirpServiceImpl {
    pub fn new(chirp_repo: Arc<dyn ChirpRepository>) -> Self {
        Self { chirp_repo }
    }
}

#[async_trait]
impl ChirpService for ChirpServiceImpl {
    async fn create_chirp(&self, author_id: Uuid, body: &str) -> Result<Chirp, ChirpError> {
        if chirp_length(body) > MAX_CHIRP_LENGTH {
            return Err(ChirpError::TooLong);
        }

        let chirp = Chirp::new(author_id, content_filter::censor(body));

        let created = self
            .chirp_repo
            .create(&chirp)
            .await
            .map_err(|e| ChirpError::Internal(e.to_string()))?;

        tracing::debug!(chirp_id = %created.id, %author_id, "Chirp created");
        Ok(created)
    }

    async fn list_chirps(
        &self,
        author_id: Option<Uuid>,
        sort: SortOrder,
    ) -> Result<Vec<Chirp>, ChirpError> {
        let mut chirps = match author_id {
            Some(id) => self.chirp_repo.find_by_author(id).await,
            None => self.chirp_repo.find_all().await,
        }
        .map_err(|e| ChirpError::Internal(e.to_string()))?;

        sort.apply(&mut chirps);
        Ok(chirps)
    }

    async fn get_chirp(&self, chirp_id: Uuid) -> Result<Chirp, ChirpError> {
        self.chirp_repo
            .find_by_id(chirp_id)
            .await
            .map_err(|e| ChirpError::Internal(e.to_string()))?
            .ok_or(ChirpError::NotFound)
    }

    async fn delete_chirp(&self, chirp_id: Uuid, actor_id: Uuid) -> Result<(), ChirpError> {
        let chirp = self.get_chirp(chirp_id).await?;

        if !chirp.is_owned_by(actor_id) {
            tracing::debug!(%chirp_id, %actor_id, "Delete by non-owner refused");
            return Err(ChirpError::Forbidden);
        }

        self.chirp_repo.delete(chirp_id).await.map_err(|e| match e {
            AppError::NotFound(_) => ChirpError::NotFound,
            e => ChirpError::Internal(e.to_string()),
        })
    }
}
