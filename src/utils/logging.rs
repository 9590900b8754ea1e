//! Logging - tracing subscriber setup
//!
//! Logs go to stderr and to a daily-rolling file in the data directory.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::Result;
use crate::utils::fs::get_or_create_data_dir;

const LOG_FILE_PREFIX: &str = "exam-admin.log";

/// Install the global subscriber; keep the guard alive until exit
pub fn init_logging() -> Result<WorkerGuard> {
    let log_dir = get_or_create_data_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTime::rfc_3339())
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTime::rfc_3339())
                .with_ansi(false)
                .with_writer(file_writer),
        )
        .init();

    tracing::info!(dir = ?log_dir, "Logging initialized");
    Ok(guard)
}
