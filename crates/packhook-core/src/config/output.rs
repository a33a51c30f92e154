//! Output sink configuration.

use serde::{Deserialize, Serialize};

/// Where plugin output lines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkKind {
    /// Plain lines on standard output.
    #[default]
    Stdout,
    /// One `info` tracing event per line.
    Log,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Selected sink.
    #[serde(default)]
    pub sink: SinkKind,
}
