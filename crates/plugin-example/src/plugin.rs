//! Example plugin implementation: registers with any [`HookHost`].

use std::sync::Arc;

use async_trait::async_trait;

use packhook_core::result::AppResult;
use packhook_plugin::hooks::definitions::HookPoint;
use packhook_plugin::hooks::registry::HookHost;
use packhook_plugin::output::{OutputSink, StdoutSink};
use packhook_plugin::plugin_info;
use packhook_plugin::registry::{Plugin, PluginInfo};

use crate::hooks::RunHook;

/// Plugin ID used for every handler this plugin registers.
pub const PLUGIN_ID: &str = "example";

/// Announces the `run` lifecycle event.
#[derive(Debug, Clone)]
pub struct ExamplePlugin {
    sink: Arc<dyn OutputSink>,
}

impl ExamplePlugin {
    /// Create a plugin that writes to standard output.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StdoutSink))
    }

    /// Create a plugin that writes to `sink`.
    pub fn with_sink(sink: Arc<dyn OutputSink>) -> Self {
        Self { sink }
    }
}

impl Default for ExamplePlugin {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Plugin for ExamplePlugin {
    fn info(&self) -> PluginInfo {
        plugin_info!(
            id: PLUGIN_ID,
            name: "Example Plugin",
            version: env!("CARGO_PKG_VERSION"),
            description: "Prints a message when the compiler runs",
            hooks: [HookPoint::Run]
        )
    }

    async fn apply(&self, host: &dyn HookHost) -> AppResult<()> {
        host.on_hook(
            HookPoint::Run.as_str(),
            Arc::new(RunHook::new(PLUGIN_ID, self.sink.clone())),
        )
        .await?;

        tracing::debug!("example plugin registered on run");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use uuid::Uuid;

    use packhook_plugin::hooks::continuation::Continuation;
    use packhook_plugin::hooks::definitions::HookContext;
    use packhook_plugin::hooks::registry::HookHandler;
    use packhook_plugin::output::RecordingSink;

    use super::*;
    use crate::hooks::RUN_MESSAGE;

    /// Host stub that records every registration.
    #[derive(Default)]
    struct StubHost {
        registered: Mutex<Vec<(String, Arc<dyn HookHandler>)>>,
    }

    impl StubHost {
        fn take(&self) -> Vec<(String, Arc<dyn HookHandler>)> {
            std::mem::take(&mut *self.registered.lock().unwrap_or_else(|e| e.into_inner()))
        }
    }

    #[async_trait]
    impl HookHost for StubHost {
        async fn on_hook(&self, name: &str, handler: Arc<dyn HookHandler>) -> AppResult<()> {
            self.registered
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push((name.to_string(), handler));
            Ok(())
        }
    }

    fn run_context() -> HookContext {
        HookContext::new(HookPoint::Run, "stub", Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_registers_exactly_one_run_handler() {
        let host = StubHost::default();
        ExamplePlugin::with_sink(Arc::new(RecordingSink::new()))
            .apply(&host)
            .await
            .expect("apply");

        let registered = host.take();
        assert_eq!(registered.len(), 1);
        assert_eq!(registered[0].0, "run");
        assert_eq!(registered[0].1.plugin_id(), PLUGIN_ID);
    }

    #[tokio::test]
    async fn test_fire_writes_line_then_continues() {
        let sink = Arc::new(RecordingSink::new());
        let host = StubHost::default();
        ExamplePlugin::with_sink(sink.clone())
            .apply(&host)
            .await
            .expect("apply");
        let (_, handler) = host.take().pop().expect("one handler");

        let calls = Arc::new(AtomicUsize::new(0));
        let lines_at_done = Arc::new(AtomicUsize::new(usize::MAX));
        let (counter, observed, observed_sink) = (calls.clone(), lines_at_done.clone(), sink.clone());
        let done = Continuation::from_fn(PLUGIN_ID, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            observed.store(observed_sink.len(), Ordering::SeqCst);
        });

        handler.handle(&run_context(), done);

        assert_eq!(sink.lines(), vec![RUN_MESSAGE]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // The line was already written when the continuation ran.
        assert_eq!(lines_at_done.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_independent_hosts_do_not_share_state() {
        let first_sink = Arc::new(RecordingSink::new());
        let second_sink = Arc::new(RecordingSink::new());
        let (first_host, second_host) = (StubHost::default(), StubHost::default());

        ExamplePlugin::with_sink(first_sink.clone())
            .apply(&first_host)
            .await
            .expect("apply first");
        ExamplePlugin::with_sink(second_sink.clone())
            .apply(&second_host)
            .await
            .expect("apply second");

        let (_, first) = first_host.take().pop().expect("first handler");
        let (_, second) = second_host.take().pop().expect("second handler");

        first.handle(&run_context(), Continuation::from_fn(PLUGIN_ID, || {}));
        assert_eq!(first_sink.len(), 1);
        assert!(second_sink.is_empty());

        second.handle(&run_context(), Continuation::from_fn(PLUGIN_ID, || {}));
        assert_eq!(first_sink.len(), 1);
        assert_eq!(second_sink.len(), 1);
    }

    #[test]
    fn test_info_lists_run_hook() {
        let info = ExamplePlugin::new().info();
        assert_eq!(info.id, PLUGIN_ID);
        assert_eq!(info.hooks, vec![HookPoint::Run]);
    }
}
