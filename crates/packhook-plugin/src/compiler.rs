//! Reference compiler: a minimal host that applies plugins and fires the
//! run lifecycle. It compiles nothing; it exists so plugins have a real
//! [`HookHost`] to register against.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use packhook_core::config::compiler::CompilerConfig;
use packhook_core::result::AppResult;

use crate::hooks::definitions::{HookContext, HookPoint};
use crate::hooks::dispatcher::{DispatchReport, HookDispatcher};
use crate::hooks::registry::{HookHandler, HookHost, HookRegistry};
use crate::registry::{Plugin, PluginInfo, PluginRegistry};

/// Summary of one completed run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    /// Identifier shared by every hook context of the run.
    pub run_id: Uuid,
    /// One report per lifecycle hook, in firing order.
    pub hooks: Vec<DispatchReport>,
    /// Total handlers that signalled completion.
    pub handlers_invoked: usize,
    /// Wall time of the whole run.
    pub elapsed_ms: u64,
}

/// Hosts plugins and drives `before_run` → `run` → `done`.
#[derive(Debug)]
pub struct Compiler {
    config: CompilerConfig,
    hook_registry: Arc<HookRegistry>,
    dispatcher: HookDispatcher,
    plugin_registry: PluginRegistry,
}

impl Compiler {
    /// Creates a compiler with no plugins applied.
    pub fn new(config: CompilerConfig) -> Self {
        let hook_registry = Arc::new(HookRegistry::new());
        let dispatcher = HookDispatcher::new(hook_registry.clone(), config.hook_timeout());

        Self {
            config,
            hook_registry,
            dispatcher,
            plugin_registry: PluginRegistry::new(),
        }
    }

    /// Compiler name used in hook contexts.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Applies a plugin: reserves its ID, then lets it register its hooks.
    ///
    /// The ID is recorded before the plugin runs, so a concurrent apply of
    /// the same ID is rejected without registering anything. If the plugin
    /// fails part-way, its handlers and its reservation are removed again.
    pub async fn apply(&self, plugin: &dyn Plugin) -> AppResult<()> {
        let info = plugin.info();

        self.plugin_registry.register(info.clone()).await?;

        if let Err(e) = plugin.apply(self).await {
            error!(plugin_id = %info.id, error = %e, "Plugin apply failed");
            self.hook_registry.unregister_plugin(&info.id).await;
            self.plugin_registry.unregister(&info.id).await;
            return Err(e);
        }

        info!(
            plugin_id = %info.id,
            name = %info.name,
            version = %info.version,
            hooks = info.hooks.len(),
            "Plugin applied"
        );

        Ok(())
    }

    /// Fires the lifecycle hooks in order, stopping at the first failure.
    pub async fn run(&self) -> AppResult<RunStats> {
        let run_id = Uuid::new_v4();
        let started = Instant::now();

        info!(compiler = %self.config.name, run_id = %run_id, "Compiler run started");

        let mut hooks = Vec::with_capacity(HookPoint::LIFECYCLE.len());
        for hook in HookPoint::LIFECYCLE {
            let ctx = HookContext::new(hook, &self.config.name, run_id);
            let report = self.dispatcher.dispatch(&ctx).await.map_err(|e| {
                error!(compiler = %self.config.name, hook = %hook, error = %e, "Compiler run failed");
                e
            })?;
            hooks.push(report);
        }

        let stats = RunStats {
            run_id,
            handlers_invoked: hooks.iter().map(DispatchReport::handler_count).sum(),
            hooks,
            elapsed_ms: started.elapsed().as_millis() as u64,
        };

        info!(
            compiler = %self.config.name,
            run_id = %run_id,
            handlers = stats.handlers_invoked,
            elapsed_ms = stats.elapsed_ms,
            "Compiler run finished"
        );

        Ok(stats)
    }

    /// Lists applied plugins in application order.
    pub async fn plugins(&self) -> Vec<PluginInfo> {
        self.plugin_registry.list().await
    }

    /// Returns the hook registry.
    pub fn hooks(&self) -> &Arc<HookRegistry> {
        &self.hook_registry
    }
}

#[async_trait]
impl HookHost for Compiler {
    async fn on_hook(&self, name: &str, handler: Arc<dyn HookHandler>) -> AppResult<()> {
        self.hook_registry.on_hook(name, handler).await
    }
}
