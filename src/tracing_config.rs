use std::{env, io};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{AutowallpaperError, Result, config::ConfigPaths};

const LOG_FORMAT_VAR: &str = "AUTOWALLPAPER_LOG_FORMAT";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn wants_json() -> bool {
    env::var(LOG_FORMAT_VAR).is_ok_and(|format| format == "json")
}

/// Initialize tracing for the short-lived launcher process
///
/// Logs compactly to stderr. Uses RUST_LOG if set, otherwise "info".
///
/// # Errors
/// Returns error if a global subscriber is already installed
pub fn init_launcher() -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter());

    let result = if wants_json() {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_target(false).with_writer(io::stderr))
            .try_init()
    };

    result.map_err(|e| AutowallpaperError::Tracing(e.to_string()))
}

/// Initialize tracing with file output for the scheduler process
///
/// Writes to stdout and to a daily-rolling file in the autowallpaper logs
/// directory. A detached instance has no terminal, so the file is its only
/// diagnostic channel. Supports JSON output through AUTOWALLPAPER_LOG_FORMAT.
///
/// The returned guard flushes the file writer when dropped; keep it alive
/// for the life of the process.
///
/// # Errors
/// Returns error if file creation or tracing subscriber initialization fails
pub fn init_with_file() -> Result<WorkerGuard> {
    const DAYS_TO_KEEP: usize = 7;

    let log_dir = ConfigPaths::log_dir()?;

    let file_appender = tracing_appender::rolling::Builder::new()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .max_log_files(DAYS_TO_KEEP)
        .filename_prefix("autowallpaper")
        .filename_suffix("log")
        .build(&log_dir)
        .map_err(|e| AutowallpaperError::Tracing(e.to_string()))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let registry = tracing_subscriber::registry().with(env_filter());

    let result = if wants_json() {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stdout),
            )
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .pretty()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(io::stdout),
            )
            .with(
                fmt::layer()
                    .compact()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
            .try_init()
    };
    result.map_err(|e| AutowallpaperError::Tracing(e.to_string()))?;

    Ok(guard)
}
