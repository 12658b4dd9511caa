//! Infrastructure Layer
//!
//! Contains implementations for external concerns:
//! - Database pool and repositories (PostgreSQL)
//! - Credential primitives (Argon2, JWT, refresh tokens)
//! - Prometheus metrics

pub mod database;
pub mod metrics;
pub mod repositories;
pub mod security;
