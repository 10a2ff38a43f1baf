//! Logging Infrastructure
//!
//! Tracing goes to the in-app log pane via tui-logger; when a log directory
//! is configured, a daily-rolling file gets the same stream.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logger; the returned guard must live for the whole run
/// when file output is enabled.
pub fn init(log_dir: Option<&str>) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter);

    let guard = if let Some(dir) = log_dir.filter(|d| !d.trim().is_empty()) {
        let file_appender = tracing_appender::rolling::daily(dir, "plateful-console");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(false),
            )
            .init();
        Some(guard)
    } else {
        registry.init();
        None
    };

    // Adapter in case a dependency logs via the log crate
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    guard
}
