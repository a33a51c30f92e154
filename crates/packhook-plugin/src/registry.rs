//! Plugin registry: records which plugins a host has applied.

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;

use packhook_core::error::AppError;
use packhook_core::result::AppResult;

use crate::hooks::definitions::HookPoint;
use crate::hooks::registry::HookHost;

/// Metadata about a plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginInfo {
    /// Unique plugin identifier.
    pub id: String,
    /// Human-readable plugin name.
    pub name: String,
    /// Plugin version string.
    pub version: String,
    /// Plugin description.
    pub description: String,
    /// Hook points this plugin registers for.
    pub hooks: Vec<HookPoint>,
}

/// Trait that all plugins implement.
///
/// The host calls [`Plugin::apply`] once at setup; the plugin attaches its
/// handlers through the borrowed [`HookHost`] and must not retain it.
#[async_trait]
pub trait Plugin: Send + Sync + Debug {
    /// Returns plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Registers the plugin's hook handlers with `host`.
    async fn apply(&self, host: &dyn HookHost) -> AppResult<()>;
}

/// Registry of applied plugins, in application order.
#[derive(Debug, Default)]
pub struct PluginRegistry {
    plugins: RwLock<Vec<PluginInfo>>,
}

impl PluginRegistry {
    /// Creates a new empty plugin registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a plugin. Fails if the same ID is already recorded.
    pub async fn register(&self, info: PluginInfo) -> AppResult<()> {
        let mut plugins = self.plugins.write().await;

        if plugins.iter().any(|p| p.id == info.id) {
            return Err(AppError::conflict(format!(
                "Plugin '{}' is already applied",
                info.id
            )));
        }

        info!(plugin_id = %info.id, name = %info.name, version = %info.version, "Registering plugin");

        plugins.push(info);
        Ok(())
    }

    /// Removes a recorded plugin. Returns whether it was present.
    pub async fn unregister(&self, plugin_id: &str) -> bool {
        let mut plugins = self.plugins.write().await;
        let before = plugins.len();
        plugins.retain(|p| p.id != plugin_id);

        let removed = plugins.len() != before;
        if removed {
            info!(plugin_id = %plugin_id, "Plugin unregistered");
        }
        removed
    }

    /// Checks whether a plugin is recorded.
    pub async fn contains(&self, plugin_id: &str) -> bool {
        let plugins = self.plugins.read().await;
        plugins.iter().any(|p| p.id == plugin_id)
    }

    /// Lists recorded plugin metadata in application order.
    pub async fn list(&self) -> Vec<PluginInfo> {
        self.plugins.read().await.clone()
    }

    /// Returns plugin count.
    pub async fn count(&self) -> usize {
        self.plugins.read().await.len()
    }
}
