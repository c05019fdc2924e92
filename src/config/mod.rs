//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → loader.rs (TFM_VERBOSE override)
//!     → FacadeConfig (validated, immutable)
//!     → consumed once when the facade is built
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload because the
//!   verbosity flag is read-only after startup
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_env_overrides, load_config, load_config_str, ConfigError};
pub use schema::{FacadeConfig, LogFormat, ObservabilityConfig};
