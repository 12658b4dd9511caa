//! # Chirpy
//!
//! A short-message ("chirp") HTTP API:
//! - Account registration and password login
//! - Signed session tokens and revocable refresh tokens
//! - Chirp posting, listing and deletion with ownership checks
//! - A payment-provider webhook for tier upgrades
//! - Static file serving with an admin hit counter
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities and repository traits
//! - **Application Layer**: Services and DTOs
//! - **Infrastructure Layer**: PostgreSQL, credential primitives, metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ```text
//! chirpy/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ Database, security, metrics
//! +-- presentation/   HTTP routes, handlers, middleware
//! +-- shared/         Errors, content filter
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod shared;
pub mod startup;
pub mod telemetry;
