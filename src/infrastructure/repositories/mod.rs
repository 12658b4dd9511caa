//! Repository Implementations
//!
//! PostgreSQL implementations of the domain repository traits.
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{
//!     PgChirpRepository, PgRefreshTokenRepository, PgUserRepository,
//! };
//!
//! fn setup_repositories(pool: PgPool) {
//!     let users = PgUserRepository::new(pool.clone());
//!     let chirps = PgChirpRepository::new(pool.clone());
//!     let tokens = PgRefreshTokenRepository::new(pool);
//! }
//! ```

pub mod chirp_repository;
pub mod refresh_token_repository;
pub mod user_repository;

pub use chirp_repository::PgChirpRepository;
pub use refresh_token_repository::PgRefreshTokenRepository;
pub use user_repository::PgUserRepository;
