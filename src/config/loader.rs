//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::FacadeConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `verbose`.
pub const VERBOSE_ENV: &str = "TFM_VERBOSE";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FacadeConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    load_config_str(&content)
}

/// Parse and validate configuration from TOML text.
pub fn load_config_str(content: &str) -> Result<FacadeConfig, ConfigError> {
    let config: FacadeConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply `TFM_VERBOSE` from the process environment.
pub fn apply_env_overrides(config: &mut FacadeConfig) {
    let value = std::env::var(VERBOSE_ENV).ok();
    apply_verbose_override(config, value.as_deref());
}

/// Apply a raw `TFM_VERBOSE` value. Unrecognized values leave the config untouched.
pub fn apply_verbose_override(config: &mut FacadeConfig, value: Option<&str>) {
    let Some(raw) = value else {
        return;
    };

    match parse_bool(raw) {
        Some(verbose) => config.verbose = verbose,
        None => tracing::warn!(
            env = VERBOSE_ENV,
            value = raw,
            "Ignoring unrecognized boolean value"
        ),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
