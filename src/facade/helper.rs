//! Production facade.

use std::fmt::{self, Display};
use std::sync::Arc;

use serde_json::Value;

use crate::config::FacadeConfig;
use crate::facade::introspect::{error_object_map, ErrorObject};
use crate::facade::message::{Level, LogMessage};
use crate::facade::sink::{LogSink, StdoutSink};
use crate::facade::Facade;
use crate::observability::{MetricsClient, RecorderClient};

/// Namespace prepended to every metric name.
pub const METRIC_NAMESPACE: &str = "tfm";

/// `tfm.<name>`.
pub fn metric_name(name: &str) -> String {
    format!("{}.{}", METRIC_NAMESPACE, name)
}

/// Facade writing TFMLOG lines to a sink and metrics to a client.
///
/// Build once at startup and share it as `Arc<dyn Facade>`.
#[derive(Clone)]
pub struct TfmFacade {
    verbose: bool,
    sink: Arc<dyn LogSink>,
    metrics: Arc<dyn MetricsClient>,
}

impl TfmFacade {
    pub fn new(verbose: bool, sink: Arc<dyn LogSink>, metrics: Arc<dyn MetricsClient>) -> Self {
        Self {
            verbose,
            sink,
            metrics,
        }
    }

    /// Stdout sink and the global `metrics` recorder.
    pub fn from_config(config: &FacadeConfig) -> Self {
        Self::new(config.verbose, Arc::new(StdoutSink), Arc::new(RecorderClient))
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    fn emit(&self, level: Level, values: &[&dyn Display]) {
        let line = LogMessage::new(level, values).render();
        self.sink.write_line(&line);
    }
}

impl fmt::Debug for TfmFacade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TfmFacade")
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl Facade for TfmFacade {
    fn log_error(&self, values: &[&dyn Display]) {
        self.emit(Level::Error, values);
    }

    fn log_info(&self, values: &[&dyn Display]) {
        self.emit(Level::Info, values);
    }

    fn log_warn(&self, values: &[&dyn Display]) {
        self.emit(Level::Warn, values);
    }

    fn log_debug(&self, values: &[&dyn Display]) {
        if self.verbose {
            self.emit(Level::Debug, values);
        }
    }

    fn add_metric(&self, metric: &str, value: f64) {
        let name = metric_name(metric);
        let line = format!("Pushing metric: {}, value: {}", name, value);
        self.emit(Level::Info, &[&line]);
        self.metrics.metric(&name, value);
    }

    fn log_error_with_interface(&self, error: ErrorObject<'_>, values: &[&dyn Display]) {
        if error.is_absent() {
            return;
        }

        // The description is diagnostics only; it is not part of the TFMLOG output
        match error_object_map(&error, self) {
            Ok(Some(map)) => {
                let described = Value::Object(map);
                tracing::debug!(error_object = %described, "Described error object");
            }
            Ok(None) => {}
            Err(e) => {
                self.log_warn(&[&"something went wrong in log_error_with_interface", &e]);
            }
        }

        if !values.is_empty() {
            self.emit(Level::Error, values);
        }
    }
}
