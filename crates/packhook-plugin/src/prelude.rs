//! Prelude for convenient imports.

pub use async_trait::async_trait;

pub use packhook_core::error::AppError;
pub use packhook_core::result::AppResult;

pub use crate::hooks::continuation::Continuation;
pub use crate::hooks::definitions::{HookContext, HookPoint};
pub use crate::hooks::registry::{HookHandler, HookHost};
pub use crate::output::{OutputSink, StdoutSink};
pub use crate::registry::{Plugin, PluginInfo};
pub use crate::traits::ClosureHandler;

pub use crate::plugin_info;
