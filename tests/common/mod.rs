//! Shared fixtures for facade integration tests.

use std::sync::Arc;

use tfm_observability::{Facade, MemorySink, RecordingMetrics, TfmFacade};

/// A facade wired to in-memory doubles.
pub struct Harness {
    pub facade: Arc<dyn Facade>,
    pub sink: MemorySink,
    pub metrics: RecordingMetrics,
}

impl Harness {
    pub fn new(verbose: bool) -> Self {
        let sink = MemorySink::new();
        let metrics = RecordingMetrics::new();
        let facade: Arc<dyn Facade> = Arc::new(TfmFacade::new(
            verbose,
            Arc::new(sink.clone()),
            Arc::new(metrics.clone()),
        ));
        Self {
            facade,
            sink,
            metrics,
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.sink.lines()
    }
}

/// The line the facade writes for `level` and `details`.
#[allow(dead_code)]
pub fn expected_line(level: &str, details: &str) -> String {
    format!(
        "TFMLOG:{{\"level\":\"{}\",\"details\":\"{}\"}}",
        level, details
    )
}
