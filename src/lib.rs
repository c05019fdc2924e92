//! TFM observability facade
//!
//! Log lines go to stdout as `TFMLOG:{"level":..,"details":..}`; metrics go to
//! the `metrics` recorder under the `tfm.` namespace.

mod macros;

pub mod config;
pub mod facade;
pub mod observability;

pub use config::FacadeConfig;
pub use facade::{ErrorObject, Facade, HasMessage, MemorySink, StructuredError, TfmFacade};
pub use observability::{MetricsClient, RecordingMetrics};
