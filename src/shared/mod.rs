//! Shared Utilities
//!
//! Common utilities used across all layers.

pub mod content_filter;
pub mod error;
