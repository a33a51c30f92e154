//! # packhook-plugin
//!
//! Plugin framework for packhook. Provides:
//!
//! - The host capability plugins register against ([`HookHost`])
//! - Named hook registry with priority-ordered registration
//! - Continuation-passing dispatcher that runs handlers in series
//! - Injectable output sinks for plugin side effects
//! - A minimal reference [`Compiler`] that applies plugins and fires the
//!   `before_run` / `run` / `done` lifecycle

pub mod compiler;
pub mod hooks;
pub mod macros;
pub mod output;
pub mod prelude;
pub mod registry;
pub mod traits;

pub use compiler::{Compiler, RunStats};
pub use hooks::continuation::Continuation;
pub use hooks::definitions::{HookContext, HookPoint};
pub use hooks::dispatcher::{DispatchReport, HookDispatcher};
pub use hooks::registry::{HookHandler, HookHost, HookRegistry};
pub use output::{OutputSink, RecordingSink, StdoutSink, TracingSink};
pub use registry::{Plugin, PluginInfo, PluginRegistry};
