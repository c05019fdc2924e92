//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the diagnostics filter directive parses
//! - Check the metrics bind address parses
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: FacadeConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::FacadeConfig;

/// A single semantic problem with a loaded config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("observability.log_level `{value}` is not a valid filter: {reason}")]
    InvalidLogLevel { value: String, reason: String },

    #[error("observability.metrics_address `{0}` is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &FacadeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let obs = &config.observability;

    if let Err(e) = EnvFilter::try_new(&obs.log_level) {
        errors.push(ValidationError::InvalidLogLevel {
            value: obs.log_level.clone(),
            reason: e.to_string(),
        });
    }

    if let Some(addr) = &obs.metrics_address {
        if addr.parse::<SocketAddr>().is_err() {
            errors.push(ValidationError::InvalidMetricsAddress(addr.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
