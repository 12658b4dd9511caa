//! Opaque refresh tokens.
//!
//! 32 random bytes, hex encoded. Only the SHA-256 digest is stored.

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Random bytes per token.
pub const TOKEN_BYTES: usize = 32;

/// Generate a fresh 64-character hex token.
pub fn generate() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Hash refresh token for storage
pub fn hash(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
