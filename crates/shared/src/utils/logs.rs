use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Owns the log pipeline for the lifetime of the process. Dropping it flushes
/// the file writer, so keep it alive in `main` until the server has stopped.
pub struct Logger {
    _file_guard: WorkerGuard,
}

impl Logger {
    pub fn new(component: &str, is_dev: bool) -> Self {
        let log_dir = if is_dev { "./logs" } else { "/var/log/warikan" };
        let file_name = format!("warikan_{component}.log");
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
        let (file_writer, guard) = non_blocking(file_appender);

        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_ansi(false)
            .json()
            .with_filter(EnvFilter::new("info"));

        let console_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_names(true)
            .with_ansi(is_dev)
            .with_filter(console_filter);

        let result = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer)
            .try_init();

        if let Err(e) = result {
            eprintln!("Logger for {component} was not installed: {e}");
        }

        Self { _file_guard: guard }
    }
}
