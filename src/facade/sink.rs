//! Output sinks for rendered lines.

use std::io::Write;
use std::sync::{Arc, Mutex};

/// Destination for rendered facade lines.
pub trait LogSink: Send + Sync {
    /// Write one line. The sink appends the newline.
    fn write_line(&self, line: &str);
}

/// Writes to standard output, one locked write per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        let mut out = std::io::stdout().lock();
        // Closed pipes and full disks must not reach the caller
        let _ = out.write_all(buf.as_bytes()).and_then(|_| out.flush());
    }
}

/// Keeps lines in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    pub fn clear(&self) {
        self.lines.lock().map(|mut l| l.clear()).ok();
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .map(|mut l| l.push(line.to_string()))
            .ok();
    }
}
