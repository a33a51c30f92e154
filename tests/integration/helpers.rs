//! Shared test helpers for integration tests.

use std::sync::Arc;

use packhook_core::config::compiler::CompilerConfig;
use packhook_plugin::compiler::Compiler;
use packhook_plugin::output::RecordingSink;
use plugin_example::ExamplePlugin;

/// A compiler with the example plugin applied, writing into a recording sink.
pub struct TestCompiler {
    /// The compiler under test
    pub compiler: Compiler,
    /// Everything the example plugin wrote
    pub sink: Arc<RecordingSink>,
}

impl TestCompiler {
    /// Create a compiler named `name` and apply the example plugin to it
    pub async fn new(name: &str) -> Self {
        let compiler = Compiler::new(CompilerConfig {
            name: name.to_string(),
            hook_timeout_seconds: 5,
        });
        let sink = Arc::new(RecordingSink::new());

        compiler
            .apply(&ExamplePlugin::with_sink(sink.clone()))
            .await
            .expect("Failed to apply example plugin");

        Self { compiler, sink }
    }
}
