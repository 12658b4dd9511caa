//! Health Check Handler

/// Readiness probe. Plain text `OK`.
pub async fn readiness() -> &'static str {
    "OK"
}
