//! Hook dispatcher: fires a hook through its handlers in series.
//!
//! Each handler receives a fresh [`Continuation`]. The next handler starts
//! only after the previous one called `done`. A handler that drops its
//! continuation, or does not call it within the timeout, aborts the dispatch.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, error};

use packhook_core::error::AppError;
use packhook_core::result::AppResult;

use super::continuation::Continuation;
use super::definitions::{HookContext, HookPoint};
use super::registry::HookRegistry;

/// Outcome of one handler that completed.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerOutcome {
    /// Plugin that owns the handler.
    pub plugin_id: String,
    /// Time until the continuation was invoked.
    pub elapsed_ms: u64,
}

/// Result of dispatching one hook to all of its handlers.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    /// The hook that was fired.
    pub hook: HookPoint,
    /// Handlers in the order they completed.
    pub completed: Vec<HandlerOutcome>,
}

impl DispatchReport {
    fn new(hook: HookPoint) -> Self {
        Self {
            hook,
            completed: Vec::new(),
        }
    }

    /// Number of handlers that signalled completion.
    pub fn handler_count(&self) -> usize {
        self.completed.len()
    }
}

/// Dispatches hooks to all registered handlers.
#[derive(Debug)]
pub struct HookDispatcher {
    registry: Arc<HookRegistry>,
    /// Per-handler wait for the continuation.
    timeout: Duration,
}

impl HookDispatcher {
    /// Creates a new hook dispatcher.
    pub fn new(registry: Arc<HookRegistry>, timeout: Duration) -> Self {
        Self { registry, timeout }
    }

    /// Dispatches `ctx.hook` to every registered handler in priority order.
    pub async fn dispatch(&self, ctx: &HookContext) -> AppResult<DispatchReport> {
        let handlers = self.registry.get_handlers(&ctx.hook).await;
        let mut report = DispatchReport::new(ctx.hook);

        if handlers.is_empty() {
            return Ok(report);
        }

        debug!(
            hook = %ctx.hook,
            handler_count = handlers.len(),
            "Dispatching hook"
        );

        for handler in &handlers {
            let plugin_id = handler.plugin_id();
            let started = Instant::now();
            let (done, signal) = Continuation::channel(plugin_id);

            handler.handle(ctx, done);

            match tokio::time::timeout(self.timeout, signal).await {
                Ok(Ok(())) => {}
                Ok(Err(_)) => {
                    error!(
                        hook = %ctx.hook,
                        plugin_id = %plugin_id,
                        "Handler dropped its continuation"
                    );
                    return Err(AppError::plugin(format!(
                        "Plugin '{}' finished hook '{}' without invoking its continuation",
                        plugin_id, ctx.hook
                    )));
                }
                Err(_) => {
                    error!(
                        hook = %ctx.hook,
                        plugin_id = %plugin_id,
                        timeout_secs = self.timeout.as_secs(),
                        "Handler timed out"
                    );
                    return Err(AppError::timeout(format!(
                        "Plugin '{}' did not complete hook '{}' within {:?}",
                        plugin_id, ctx.hook, self.timeout
                    )));
                }
            }

            let elapsed_ms = started.elapsed().as_millis() as u64;
            debug!(
                hook = %ctx.hook,
                plugin_id = %plugin_id,
                elapsed_ms = elapsed_ms,
                "Handler completed"
            );

            report.completed.push(HandlerOutcome {
                plugin_id: plugin_id.to_string(),
                elapsed_ms,
            });
        }

        Ok(report)
    }
}
