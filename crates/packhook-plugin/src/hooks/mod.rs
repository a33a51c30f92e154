//! Hook system: definitions, continuations, registry, and dispatcher.

pub mod continuation;
pub mod definitions;
pub mod dispatcher;
pub mod registry;

pub use continuation::Continuation;
pub use definitions::{HookContext, HookPoint};
pub use dispatcher::{DispatchReport, HookDispatcher};
pub use registry::{HookHandler, HookHost, HookRegistry};
