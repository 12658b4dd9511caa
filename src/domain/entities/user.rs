//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::AppError;

/// Represents a Chirpy account.
///
/// Maps to the `users` table:
/// - id: UUID PRIMARY KEY
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - email: TEXT NOT NULL UNIQUE
/// - hashed_password: TEXT NOT NULL
/// - is_chirpy_red: BOOLEAN NOT NULL DEFAULT FALSE
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Account identifier (primary key)
    pub id: Uuid,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,

    /// Email address (unique)
    pub email: String,

    /// Argon2 password hash
    #[serde(skip_serializing)]
    pub hashed_password: String,

    /// Upgraded membership tier
    pub is_chirpy_red: bool,
}

impl User {
    /// Build a fresh account with a new identifier.
    pub fn new(email: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email: email.into(),
            hashed_password: hashed_password.into(),
            is_chirpy_red: false,
        }
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Create a new user. Fails with `Conflict` when the email is taken.
    async fn create(&self, user: &User) -> Result<User, AppError>;

    /// Replace the email and password hash of an existing user.
    async fn update_credentials(
        &self,
        id: Uuid,
        email: &str,
        hashed_password: &str,
    ) -> Result<User, AppError>;

    /// Mark a user as upgraded to Chirpy Red.
    async fn upgrade(&self, id: Uuid) -> Result<(), AppError>;

    /// Delete every user. Chirps and refresh tokens cascade.
    async fn delete_all(&self) -> Result<u64, AppError>;
}
