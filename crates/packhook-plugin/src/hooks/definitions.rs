//! Hook point definitions and the context passed to handlers.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use packhook_core::error::AppError;

/// Enumeration of all hook points a compiler exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookPoint {
    /// Fired before a run starts.
    BeforeRun,
    /// Fired when the compiler runs.
    Run,
    /// Fired after every other lifecycle hook has completed.
    Done,
}

impl HookPoint {
    /// Lifecycle hooks in the order a run fires them.
    pub const LIFECYCLE: [HookPoint; 3] = [Self::BeforeRun, Self::Run, Self::Done];

    /// Returns the string name of this hook point.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BeforeRun => "before_run",
            Self::Run => "run",
            Self::Done => "done",
        }
    }
}

impl std::fmt::Display for HookPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HookPoint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before_run" => Ok(Self::BeforeRun),
            "run" => Ok(Self::Run),
            "done" => Ok(Self::Done),
            other => Err(AppError::plugin(format!("unknown hook '{other}'"))),
        }
    }
}

/// Context handed to hook handlers.
///
/// Handlers may ignore it entirely; nothing in it is required for a
/// handler to complete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HookContext {
    /// The hook point being fired.
    pub hook: HookPoint,
    /// Name of the compiler firing the hook.
    pub compiler: String,
    /// Identifier shared by every hook of one run.
    pub run_id: Uuid,
    /// When the hook was fired.
    pub timestamp: DateTime<Utc>,
}

impl HookContext {
    /// Creates a new context for one hook of a run.
    pub fn new(hook: HookPoint, compiler: &str, run_id: Uuid) -> Self {
        Self {
            hook,
            compiler: compiler.to_string(),
            run_id,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_names_parse_back() {
        for hook in HookPoint::LIFECYCLE {
            let parsed: HookPoint = hook.as_str().parse().expect("known hook");
            assert_eq!(parsed, hook);
        }
    }

    #[test]
    fn test_unknown_hook_name() {
        let err = "emit".parse::<HookPoint>().expect_err("unknown hook");
        assert_eq!(err.kind, packhook_core::error::ErrorKind::Plugin);
        assert!(err.message.contains("emit"));
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&HookPoint::BeforeRun).expect("serialize");
        assert_eq!(json, "\"before_run\"");
    }

    #[test]
    fn test_context_fields() {
        let run_id = Uuid::new_v4();
        let ctx = HookContext::new(HookPoint::Run, "site", run_id);
        assert_eq!(ctx.hook, HookPoint::Run);
        assert_eq!(ctx.compiler, "site");
        assert_eq!(ctx.run_id, run_id);
    }
}
