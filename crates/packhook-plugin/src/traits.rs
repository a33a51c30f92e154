//! Convenience handler types for plugin development.

use std::sync::Arc;

use crate::hooks::continuation::Continuation;
use crate::hooks::definitions::HookContext;
use crate::hooks::registry::HookHandler;

/// A closure-based hook handler for quick handler creation.
pub struct ClosureHandler {
    id: String,
    priority_val: i32,
    handler: Arc<dyn Fn(&HookContext, Continuation) + Send + Sync>,
}

impl std::fmt::Debug for ClosureHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosureHandler")
            .field("id", &self.id)
            .field("priority_val", &self.priority_val)
            .field("handler", &"<closure>")
            .finish()
    }
}

impl ClosureHandler {
    /// Creates a new closure-based handler.
    pub fn new<F>(plugin_id: &str, priority: i32, handler: F) -> Self
    where
        F: Fn(&HookContext, Continuation) + Send + Sync + 'static,
    {
        Self {
            id: plugin_id.to_string(),
            priority_val: priority,
            handler: Arc::new(handler),
        }
    }
}

impl HookHandler for ClosureHandler {
    fn handle(&self, ctx: &HookContext, done: Continuation) {
        (self.handler)(ctx, done)
    }

    fn plugin_id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        self.priority_val
    }
}
