//! Hook registry: plugins register handlers by hook name with priority ordering.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use packhook_core::result::AppResult;

use super::continuation::Continuation;
use super::definitions::{HookContext, HookPoint};

/// Trait for hook handler implementations.
///
/// `handle` must eventually call [`Continuation::done`]; it may do so
/// inline or from a task it spawns.
pub trait HookHandler: Send + Sync + std::fmt::Debug {
    /// Handles a hook invocation.
    fn handle(&self, ctx: &HookContext, done: Continuation);

    /// Returns the plugin ID owning this handler.
    fn plugin_id(&self) -> &str;

    /// Returns the priority (lower = runs first).
    fn priority(&self) -> i32 {
        100
    }
}

/// Capability a host hands to plugins so they can attach handlers.
#[async_trait]
pub trait HookHost: Send + Sync {
    /// Registers `handler` under the hook called `name`.
    async fn on_hook(&self, name: &str, handler: Arc<dyn HookHandler>) -> AppResult<()>;
}

/// Entry in the hook registry.
#[derive(Debug)]
struct HookEntry {
    handler: Arc<dyn HookHandler>,
    /// Lower = earlier execution.
    priority: i32,
    plugin_id: String,
}

/// Registry of hook handlers organized by hook point.
#[derive(Debug)]
pub struct HookRegistry {
    /// Hook point → handlers sorted by priority.
    handlers: RwLock<HashMap<HookPoint, Vec<HookEntry>>>,
}

impl HookRegistry {
    /// Creates a new empty hook registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a handler for a specific hook point.
    pub async fn register(&self, hook: HookPoint, handler: Arc<dyn HookHandler>) {
        let plugin_id = handler.plugin_id().to_string();
        let priority = handler.priority();

        let mut handlers = self.handlers.write().await;
        let entries = handlers.entry(hook).or_default();

        entries.push(HookEntry {
            handler,
            priority,
            plugin_id: plugin_id.clone(),
        });

        // Stable: equal priorities keep registration order
        entries.sort_by_key(|e| e.priority);

        info!(
            hook = %hook,
            plugin_id = %plugin_id,
            priority = priority,
            "Hook handler registered"
        );
    }

    /// Unregisters all handlers for a specific plugin.
    pub async fn unregister_plugin(&self, plugin_id: &str) {
        let mut handlers = self.handlers.write().await;

        for entries in handlers.values_mut() {
            entries.retain(|e| e.plugin_id != plugin_id);
        }

        handlers.retain(|_, entries| !entries.is_empty());

        info!(plugin_id = %plugin_id, "All hooks unregistered for plugin");
    }

    /// Returns all handlers for a specific hook point, sorted by priority.
    pub async fn get_handlers(&self, hook: &HookPoint) -> Vec<Arc<dyn HookHandler>> {
        let handlers = self.handlers.read().await;
        handlers
            .get(hook)
            .map(|entries| entries.iter().map(|e| e.handler.clone()).collect())
            .unwrap_or_default()
    }

    /// Returns whether any handlers are registered for a hook point.
    pub async fn has_handlers(&self, hook: &HookPoint) -> bool {
        self.handler_count(hook).await > 0
    }

    /// Returns the number of handlers registered for a hook point.
    pub async fn handler_count(&self, hook: &HookPoint) -> usize {
        let handlers = self.handlers.read().await;
        handlers.get(hook).map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns all hook points with at least one handler.
    pub async fn registered_hooks(&self) -> Vec<HookPoint> {
        let handlers = self.handlers.read().await;
        HookPoint::LIFECYCLE
            .into_iter()
            .filter(|hook| handlers.contains_key(hook))
            .collect()
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HookHost for HookRegistry {
    async fn on_hook(&self, name: &str, handler: Arc<dyn HookHandler>) -> AppResult<()> {
        let hook: HookPoint = name.parse()?;
        self.register(hook, handler).await;
        Ok(())
    }
}
