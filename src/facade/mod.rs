//! The observability facade.
//!
//! # Data Flow
//! ```text
//! caller
//!     → Facade operation
//!     → introspect.rs / convert.rs (error objects, generic maps)
//!     → message.rs (LogMessage → `TFMLOG:{"level":..,"details":..}`)
//!     → sink.rs (stdout)            or   observability::metrics (client)
//! ```
//!
//! # Design Decisions
//! - One trait, object safe, so test doubles can stand in for the facade
//! - Nothing here returns an error to the caller; failures degrade to a
//!   missing or degraded line
//! - The facade is built once and passed explicitly, no global handle

pub mod convert;
pub mod helper;
pub mod introspect;
pub mod message;
pub mod sink;

use std::fmt::Display;

pub use convert::{to_generic_map, to_json_text};
pub use helper::{metric_name, TfmFacade, METRIC_NAMESPACE};
pub use introspect::{
    error_object_map, sanitize, ErrorObject, HasMessage, StructuredError, SANITIZE_FALLBACK,
};
pub use message::{Level, LogMessage, LOG_PREFIX};
pub use sink::{LogSink, MemorySink, StdoutSink};

/// Logging and metrics operations exposed to the application.
///
/// Values are joined with single spaces. See the `log_*!` macros for a
/// variadic call syntax.
pub trait Facade: Send + Sync {
    fn log_error(&self, values: &[&dyn Display]);

    fn log_info(&self, values: &[&dyn Display]);

    fn log_warn(&self, values: &[&dyn Display]);

    /// Like `log_info`, but only when the facade is verbose.
    fn log_debug(&self, values: &[&dyn Display]);

    /// Push `tfm.<metric>` to the metrics client and log the push.
    fn add_metric(&self, metric: &str, value: f64);

    /// Describe `error` on a best-effort basis, then log `values` at ERROR.
    ///
    /// Nothing is logged when `error` is [`ErrorObject::Absent`]. The
    /// description itself is not written to the log output.
    fn log_error_with_interface(&self, error: ErrorObject<'_>, values: &[&dyn Display]);
}
