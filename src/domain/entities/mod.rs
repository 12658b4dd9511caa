//! # Domain Entities
//!
//! Core domain entities representing the main business objects of Chirpy.
//! All entities map directly to their corresponding database tables.
//!
//! - **User**: Account with credentials and membership tier
//! - **Chirp**: A short message owned by a user
//! - **RefreshToken**: Server-side record of an opaque refresh token
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod chirp;
mod refresh_token;
mod user;

pub use chirp::{Chirp, ChirpRepository, SortOrder, MAX_CHIRP_LENGTH};
pub use refresh_token::{RefreshToken, RefreshTokenRepository};
pub use user::{User, UserRepository};

#[cfg(test)]
pub use chirp::MockChirpRepository;
#[cfg(test)]
pub use refresh_token::MockRefreshTokenRepository;
#[cfg(test)]
pub use user::MockUserRepository;
