//! Tracing setup for the server process.
//!
//! Stdout carries the MCP stream, so logs go to stderr and, when the
//! platform data directory is writable, to a daily-rotated file as well.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "weather_alerts=info,rmcp=info";
const LOG_FILE_PREFIX: &str = "weather-alerts.log";

/// Install the global subscriber.
///
/// The filter comes from `RUST_LOG`, falling back to
/// `weather_alerts=info,rmcp=info`. A log directory that cannot be created
/// or written only drops the file layer; the only error returned is a
/// subscriber that is already installed.
pub fn init() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_appender = get_log_dir().and_then(|dir| open_appender(&dir).map(|a| (dir, a)));
    let (log_dir, file_layer) = match file_appender {
        Ok((dir, appender)) => (
            Ok(dir),
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true),
            ),
        ),
        Err(e) => (Err(e), None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    match log_dir {
        Ok(dir) => tracing::info!("Logging to {}", dir.display()),
        Err(e) => tracing::warn!("File logging disabled, stderr only: {:#}", e),
    }

    Ok(())
}

/// Create the log directory and a daily appender inside it
fn open_appender(log_dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
        .with_context(|| format!("Failed to open log file in {}", log_dir.display()))
}

/// Log directory under the platform data directory
fn get_log_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .context("Failed to determine data directory (XDG_DATA_HOME or platform equivalent)")?;

    Ok(data_dir.join("weather-alerts").join("logs"))
}
