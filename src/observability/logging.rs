//! Internal diagnostics.
//!
//! # Responsibilities
//! - Initialize the `tracing` subscriber for the crate's own events
//! - Keep diagnostics on stderr so stdout carries only facade lines
//!
//! # Design Decisions
//! - `RUST_LOG` wins over the configured level
//! - JSON or pretty format selected by config
//! - Idempotent: a second init is reported, not fatal

use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Build the filter for internal diagnostics.
pub fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global subscriber for internal diagnostics.
pub fn init_logging(config: &ObservabilityConfig) -> Result<(), TryInitError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Pretty => builder.finish().try_init(),
        LogFormat::Json => builder.json().finish().try_init(),
    }
    .map_err(|e| {
        // try_init only fails when a global subscriber already exists
        tracing::debug!(error = %e, "Diagnostics subscriber already installed");
        e
    })
}
