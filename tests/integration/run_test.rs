//! End-to-end run lifecycle tests.

use std::sync::Arc;
use std::sync::Mutex;

use packhook_core::error::ErrorKind;
use packhook_plugin::hooks::definitions::HookPoint;
use packhook_plugin::hooks::registry::HookHost;
use packhook_plugin::traits::ClosureHandler;
use plugin_example::ExamplePlugin;
use plugin_example::hooks::RUN_MESSAGE;
use plugin_example::plugin::PLUGIN_ID;

use crate::helpers::TestCompiler;

#[tokio::test]
async fn test_apply_registers_only_run() {
    let t = TestCompiler::new("site").await;

    assert_eq!(t.compiler.hooks().handler_count(&HookPoint::Run).await, 1);
    assert_eq!(t.compiler.hooks().registered_hooks().await, vec![HookPoint::Run]);
    assert!(t.sink.is_empty());

    let plugins = t.compiler.plugins().await;
    assert_eq!(plugins.len(), 1);
    assert_eq!(plugins[0].id, PLUGIN_ID);
}

#[tokio::test]
async fn test_run_prints_once_and_completes() {
    let t = TestCompiler::new("site").await;

    let stats = t.compiler.run().await.expect("run");

    assert_eq!(t.sink.lines(), vec![RUN_MESSAGE]);
    assert_eq!(stats.handlers_invoked, 1);
    let run_report = stats
        .hooks
        .iter()
        .find(|r| r.hook == HookPoint::Run)
        .expect("run report");
    assert_eq!(run_report.completed[0].plugin_id, PLUGIN_ID);
}

#[tokio::test]
async fn test_each_run_prints_one_line() {
    let t = TestCompiler::new("site").await;

    t.compiler.run().await.expect("first run");
    t.compiler.run().await.expect("second run");

    assert_eq!(t.sink.len(), 2);
}

#[tokio::test]
async fn test_two_compilers_are_independent() {
    let first = TestCompiler::new("first").await;
    let second = TestCompiler::new("second").await;

    first.compiler.run().await.expect("run first");

    assert_eq!(first.sink.len(), 1);
    assert!(second.sink.is_empty());
}

#[tokio::test]
async fn test_later_handler_runs_after_plugin_completes() {
    let t = TestCompiler::new("site").await;
    let seen_lines = Arc::new(Mutex::new(None));

    let observed = seen_lines.clone();
    let sink = t.sink.clone();
    t.compiler
        .on_hook(
            "run",
            Arc::new(ClosureHandler::new("observer", 500, move |_ctx, done| {
                *observed.lock().unwrap_or_else(|e| e.into_inner()) = Some(sink.len());
                done.done();
            })),
        )
        .await
        .expect("register observer");

    t.compiler.run().await.expect("run");

    assert_eq!(*seen_lines.lock().expect("lock"), Some(1));
}

#[tokio::test]
async fn test_applying_twice_conflicts() {
    let t = TestCompiler::new("site").await;

    let err = t
        .compiler
        .apply(&ExamplePlugin::with_sink(t.sink.clone()))
        .await
        .expect_err("duplicate plugin");

    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(t.compiler.hooks().handler_count(&HookPoint::Run).await, 1);
}
