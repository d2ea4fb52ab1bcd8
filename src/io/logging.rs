use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Filter from RUST_LOG, falling back to `default_level`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Log to `<data-dir>/logs/qt.log` (rolling daily). Used by the TUI, where
/// stderr output would corrupt the screen.
///
/// The returned guard must be held until exit so buffered lines are flushed.
pub fn init_file_logging(data_dir: &Path, default_level: &str) -> Option<WorkerGuard> {
    let logs_dir = data_dir.join("logs");
    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("warning: could not create logs directory: {}", e);
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "qt.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .try_init();
    if result.is_err() {
        return None;
    }
    Some(guard)
}

/// Log to stderr. Used by one-shot CLI commands; quiet unless RUST_LOG says otherwise.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
