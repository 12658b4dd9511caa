//! Chirp entity and repository trait.
//!
//! Maps to the `chirps` table in the database schema.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Maximum chirp length in characters.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// A short message posted by a user.
///
/// Maps to the `chirps` table:
/// - id: UUID PRIMARY KEY
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - body: TEXT NOT NULL
/// - user_id: UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chirp {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub body: String,
    /// Owning account
    pub user_id: Uuid,
}

impl Chirp {
    /// Build a fresh chirp owned by `user_id`.
    pub fn new(user_id: Uuid, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            body: body.into(),
            user_id,
        }
    }

    /// Whether `user_id` owns this chirp.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }
}

/// Ordering requested for chirp listings.
///
/// Anything other than `asc`/`desc` keeps the store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    Desc,
    #[default]
    Unsorted,
}

impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "asc" => Self::Asc,
            "desc" => Self::Desc,
            _ => Self::Unsorted,
        })
    }
}

impl SortOrder {
    /// Sort chirps by creation time. The sort is stable, so equal timestamps
    /// keep their store order.
    pub fn apply(self, chirps: &mut [Chirp]) {
        match self {
            Self::Asc => chirps.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            Self::Desc => chirps.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            Self::Unsorted => {}
        }
    }
}

/// Repository trait for Chirp data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChirpRepository: Send + Sync {
    /// Find a chirp by ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chirp>, AppError>;

    /// All chirps, oldest first.
    async fn find_all(&self) -> Result<Vec<Chirp>, AppError>;

    /// All chirps by one author, oldest first.
    async fn find_by_author(&self, user_id: Uuid) -> Result<Vec<Chirp>, AppError>;

    /// Create a new chirp.
    async fn create(&self, chirp: &Chirp) -> Result<Chirp, AppError>;

    /// Delete a chirp.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}
