//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default so an empty file is a valid config.

use serde::{Deserialize, Serialize};

/// Root configuration for the facade.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct FacadeConfig {
    /// Emit DEBUG-level facade lines. Fixed once the facade is built.
    pub verbose: bool,

    /// Internal diagnostics and metrics exporter settings.
    pub observability: ObservabilityConfig,
}

/// Output format for internal diagnostics.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive for internal diagnostics (trace, debug, info, warn, error,
    /// or a full `EnvFilter` directive). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Format for internal diagnostics.
    pub log_format: LogFormat,

    /// Install the Prometheus recorder so facade metrics are collected.
    pub metrics_enabled: bool,

    /// Scrape endpoint bind address. When unset the recorder is installed
    /// without a listener.
    pub metrics_address: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: true,
            metrics_address: None,
        }
    }
}
