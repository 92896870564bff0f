//! Logging setup
//!
//! The TUI owns the terminal, so logs go to a file in the XDG cache
//! directory instead of stdout. Level filtering follows `RUST_LOG`, with
//! `warn` as the default so swallowed cache and fetch failures are captured.

use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes file-based logging
///
/// Returns a guard that must be kept alive for the duration of the program
/// so buffered log lines are flushed on exit. Returns `None` when no log
/// directory can be determined; the app runs unlogged in that case.
pub fn init() -> Option<WorkerGuard> {
    let project_dirs = ProjectDirs::from("", "", "chuckle")?;
    let file_appender =
        tracing_appender::rolling::never(project_dirs.cache_dir(), "chuckle.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chuckle=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
