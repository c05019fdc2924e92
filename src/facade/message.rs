//! Log line construction.

use std::fmt::{Display, Write};

use serde::{Deserialize, Serialize};

use crate::facade::convert::to_json_text;

/// Prefix of every facade output line.
pub const LOG_PREFIX: &str = "TFMLOG:";

/// Severity of a facade line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
    Info,
    Warn,
    Debug,
}

impl Level {
    /// Tag written into the `level` field. The trailing space is part of the format.
    pub fn tag(self) -> &'static str {
        match self {
            Level::Error => "ERROR ",
            Level::Info => "INFO ",
            Level::Warn => "WARN ",
            Level::Debug => "DEBUG_INFO ",
        }
    }
}

/// The JSON payload of a facade line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: String,
    pub details: String,
}

impl LogMessage {
    pub fn new(level: Level, values: &[&dyn Display]) -> Self {
        Self {
            level: level.tag().to_string(),
            details: join_values(values),
        }
    }

    /// `TFMLOG:` followed by compact JSON.
    pub fn render(&self) -> String {
        format!("{}{}", LOG_PREFIX, to_json_text(self))
    }
}

/// Join values with single spaces.
///
/// A value whose `Display` fails keeps whatever it wrote before failing.
pub fn join_values(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", value);
    }
    out
}
