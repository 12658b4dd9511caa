//! Middleware
//!
//! Tower middleware for request processing.

pub mod cors;
pub mod logging;
pub mod metrics;

pub use metrics::{count_file_hits, track_requests};
