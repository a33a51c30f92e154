//! Hook implementations for the example plugin.

use std::sync::Arc;

use packhook_plugin::prelude::*;

/// Line written each time the `run` hook fires.
pub const RUN_MESSAGE: &str = "Bundler is Running";

/// Hook handler for `run`: announce, then continue.
#[derive(Debug)]
pub struct RunHook {
    plugin_id: String,
    sink: Arc<dyn OutputSink>,
}

impl RunHook {
    /// Create a new `run` hook handler writing to `sink`.
    pub fn new(plugin_id: &str, sink: Arc<dyn OutputSink>) -> Self {
        Self {
            plugin_id: plugin_id.to_string(),
            sink,
        }
    }
}

impl HookHandler for RunHook {
    fn handle(&self, ctx: &HookContext, done: Continuation) {
        tracing::debug!(compiler = %ctx.compiler, run_id = %ctx.run_id, "example plugin: run hook fired");
        self.sink.write_line(RUN_MESSAGE);
        done.done();
    }

    fn plugin_id(&self) -> &str {
        &self.plugin_id
    }
}

#[cfg(test)]
mod tests {
    use packhook_plugin::output::RecordingSink;
    use uuid::Uuid;

    use super::*;

    #[test]
    fn test_run_hook_writes_bundler_message() {
        let sink = Arc::new(RecordingSink::new());
        let hook = RunHook::new("example", sink.clone());

        let ctx = HookContext::new(HookPoint::Run, "bundler", Uuid::new_v4());
        hook.handle(&ctx, Continuation::from_fn("example", || {}));

        assert_eq!(sink.lines(), vec!["Bundler is Running".to_string()]);
    }
}
