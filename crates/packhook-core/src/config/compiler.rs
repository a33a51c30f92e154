//! Compiler (hook host) configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings for the reference compiler that hosts plugins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompilerConfig {
    /// Name reported in every hook context.
    #[serde(default = "default_name")]
    pub name: String,
    /// How long a handler may take before invoking its continuation.
    #[serde(default = "default_hook_timeout")]
    pub hook_timeout_seconds: u64,
}

impl CompilerConfig {
    /// Handler timeout as a [`Duration`].
    pub fn hook_timeout(&self) -> Duration {
        Duration::from_secs(self.hook_timeout_seconds)
    }
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            hook_timeout_seconds: default_hook_timeout(),
        }
    }
}

fn default_name() -> String {
    "packhook".to_string()
}

fn default_hook_timeout() -> u64 {
    30
}
