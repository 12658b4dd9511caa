//! # Domain Layer
//!
//! The domain layer contains the core business objects of Chirpy.
//! It is independent of any external frameworks or infrastructure concerns.
//!
//! ## Design Principles
//!
//! - No dependencies on infrastructure or presentation layers
//! - Repository traits define data access contracts
//! - Entities encapsulate domain behavior (ownership, expiry, ordering)

pub mod entities;

// Re-export commonly used types
pub use entities::*;
