//! Log file setup. The terminal belongs to the UI, so logs only go to disk.

use std::fs;
use std::io;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE_NAME: &str = "pswp.log";

/// Builds a subscriber writing to `<log_dir>/pswp.log` without installing it.
///
/// The level comes from `RUST_LOG`, defaulting to `info`. Lines are written
/// on a background thread; dropping the returned guard flushes them.
pub fn file_subscriber(
    log_dir: &Path,
) -> io::Result<(impl Subscriber + Send + Sync + 'static, WorkerGuard)> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter_layer = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(false),
        )
        .with(filter_layer);

    Ok((subscriber, guard))
}

/// Installs the file subscriber globally. Keep the returned guard alive until
/// exit or buffered lines are lost.
pub fn init_logging(log_dir: &Path) -> io::Result<WorkerGuard> {
    let (subscriber, guard) = file_subscriber(log_dir)?;
    subscriber.try_init().map_err(io::Error::other)?;
    Ok(guard)
}
