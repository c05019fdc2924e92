//! Observability plumbing behind the facade.
//!
//! # Data Flow
//! ```text
//! Facade::add_metric
//!     → metrics.rs (MetricsClient → `metrics` recorder)
//!     → Prometheus exporter (scrape endpoint or rendered handle)
//!
//! Crate internals
//!     → logging.rs (tracing events on stderr)
//! ```
//!
//! # Design Decisions
//! - Facade output (TFMLOG lines) never goes through `tracing`
//! - Internal diagnostics never go to stdout

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::{init_metrics, MetricsClient, RecorderClient, RecordingMetrics};
