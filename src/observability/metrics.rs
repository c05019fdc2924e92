//! Metrics forwarding and exposition.
//!
//! # Responsibilities
//! - Define the client seam the facade pushes metrics through
//! - Forward samples to the global `metrics` recorder
//! - Install the Prometheus recorder / scrape endpoint at startup
//!
//! # Design Decisions
//! - Samples are recorded as histograms (distribution semantics)
//! - Fire-and-forget: no delivery result is reported back
//! - Without an installed recorder the `metrics` crate drops samples

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use thiserror::Error;

use crate::config::ObservabilityConfig;

/// External metrics collaborator.
pub trait MetricsClient: Send + Sync {
    /// Push one sample. Must not block on delivery.
    fn metric(&self, name: &str, value: f64);
}

/// Client backed by the process-wide `metrics` recorder.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecorderClient;

impl MetricsClient for RecorderClient {
    fn metric(&self, name: &str, value: f64) {
        metrics::histogram!(name.to_owned()).record(value);
    }
}

/// Client that keeps every sample in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingMetrics {
    samples: Arc<Mutex<Vec<(String, f64)>>>,
}

impl RecordingMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All samples recorded so far, in call order.
    pub fn samples(&self) -> Vec<(String, f64)> {
        self.samples.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        self.samples.lock().map(|mut s| s.clear()).ok();
    }
}

impl MetricsClient for RecordingMetrics {
    fn metric(&self, name: &str, value: f64) {
        self.samples
            .lock()
            .map(|mut s| s.push((name.to_string(), value)))
            .ok();
    }
}

/// Error installing the metrics exporter.
#[derive(Debug, Error)]
pub enum MetricsInitError {
    #[error("invalid metrics address `{0}`")]
    Address(String),

    #[error("failed to install Prometheus exporter: {0}")]
    Install(#[from] BuildError),
}

/// Install the Prometheus exporter described by `config`.
///
/// Returns the render handle when the recorder is installed without a scrape
/// listener, so the host process can expose the text format itself.
pub fn init_metrics(
    config: &ObservabilityConfig,
) -> Result<Option<PrometheusHandle>, MetricsInitError> {
    if !config.metrics_enabled {
        tracing::debug!("Metrics disabled, samples will be dropped");
        return Ok(None);
    }

    match &config.metrics_address {
        Some(raw) => {
            let addr: SocketAddr = raw
                .parse()
                .map_err(|_| MetricsInitError::Address(raw.clone()))?;
            PrometheusBuilder::new().with_http_listener(addr).install()?;
            tracing::info!(address = %addr, "Prometheus scrape endpoint started");
            Ok(None)
        }
        None => {
            let handle = PrometheusBuilder::new().install_recorder()?;
            tracing::debug!("Prometheus recorder installed");
            Ok(Some(handle))
        }
    }
}
