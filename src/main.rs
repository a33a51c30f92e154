//! packhook: runs a compiler with the example plugin applied.
//!
//! Main entry point that wires configuration, logging, the compiler host,
//! and the plugin together, then performs a single run.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use packhook_core::config::AppConfig;
use packhook_core::config::output::SinkKind;
use packhook_core::error::AppError;
use packhook_plugin::compiler::Compiler;
use packhook_plugin::output::{OutputSink, StdoutSink, TracingSink};
use plugin_example::ExamplePlugin;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Run failed: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("PACKHOOK_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting packhook v{}", env!("CARGO_PKG_VERSION"));

    let sink: Arc<dyn OutputSink> = match config.output.sink {
        SinkKind::Stdout => Arc::new(StdoutSink),
        SinkKind::Log => Arc::new(TracingSink),
    };

    let compiler = Compiler::new(config.compiler);
    compiler.apply(&ExamplePlugin::with_sink(sink)).await?;
    tracing::info!(compiler = %compiler.name(), plugins = compiler.plugins().await.len(), "Plugins applied");

    let stats = compiler.run().await?;
    tracing::debug!(stats = %serde_json::to_string(&stats)?, "Run statistics");

    Ok(())
}
