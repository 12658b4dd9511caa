//! Credential primitives: password hashing, session tokens, refresh tokens.

pub mod password;
pub mod refresh_token;
pub mod session_token;

pub use password::{hash_password, verify_password, PasswordError};
pub use session_token::{Claims, TokenError};
