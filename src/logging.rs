// src/logging.rs
use crate::config::AppConfig;
use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;

/// Routes tracing output to a daily log file; stdout belongs to the menus.
/// The guard must be held until exit so buffered lines get flushed.
pub fn init_logging(config: &AppConfig) -> Result<Option<WorkerGuard>> {
    let level = LevelFilter::from_str(&config.log_level)
        .with_context(|| format!("Invalid log level {:?}", config.log_level))?;
    if level == LevelFilter::OFF {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("Cannot create log dir {}", config.log_dir.display()))?;
    let appender = tracing_appender::rolling::daily(&config.log_dir, "fruit_store.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install logger: {}", e))?;

    Ok(Some(guard))
}
