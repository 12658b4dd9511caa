//! Prometheus Metrics Module
//!
//! # Metrics Collected
//! - File server hits (reset by the admin endpoint)
//! - HTTP request counts by method and status
//!
//! The registry is owned by [`Metrics`], which lives in the application
//! state, so each running application (and each test) gets its own counters.

use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

const NAMESPACE: &str = "chirpy";

/// Metrics container shared across request handlers.
pub struct Metrics {
    registry: Registry,
    fileserver_hits: IntCounter,
    http_requests_total: IntCounterVec,
}

impl Metrics {
    /// Create a fresh registry with all collectors registered.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let fileserver_hits = IntCounter::with_opts(
            Opts::new("fileserver_hits", "Requests served by the static file server")
                .namespace(NAMESPACE),
        )?;
        let http_requests_total = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests").namespace(NAMESPACE),
            &["method", "status"],
        )?;

        registry.register(Box::new(fileserver_hits.clone()))?;
        registry.register(Box::new(http_requests_total.clone()))?;

        Ok(Self {
            registry,
            fileserver_hits,
            http_requests_total,
        })
    }

    /// Count one static file request.
    pub fn record_fileserver_hit(&self) {
        self.fileserver_hits.inc();
    }

    /// Current static file hit count.
    pub fn fileserver_hits(&self) -> u64 {
        self.fileserver_hits.get()
    }

    /// Zero the static file hit count.
    pub fn reset_fileserver_hits(&self) {
        self.fileserver_hits.reset();
    }

    /// Count one completed HTTP request.
    pub fn record_http_request(&self, method: &str, status: u16) {
        self.http_requests_total
            .with_label_values(&[method, &status.to_string()])
            .inc();
    }

    /// Encode all metrics in the Prometheus text format.
    pub fn gather(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("fileserver_hits", &self.fileserver_hits.get())
            .finish()
    }
}
