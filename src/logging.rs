//! Logging setup for the WallFrame binary
//!
//! Console output always, plus an optional daily rolling file under the
//! local data directory. Filtering covers both the binary and the core
//! library targets.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use wallframe_core::config;

const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Parse a level name (`off`, `error`, `warn`, `info`, `debug`, `trace`).
pub fn parse_level(raw: &str) -> Result<LevelFilter> {
    let name = raw.trim().to_lowercase();
    let name = if name == "warning" { "warn".to_string() } else { name };
    name.parse::<LevelFilter>()
        .map_err(|_| anyhow::anyhow!("Invalid log level: {}", raw))
}

fn level_filter(level: LevelFilter) -> EnvFilter {
    if level == LevelFilter::OFF {
        return EnvFilter::new("off");
    }
    EnvFilter::new(format!("wallframe={level},wallframe_core={level}"))
}

/// `%LOCALAPPDATA%\WallFrame\logs` on Windows, the XDG data dir elsewhere.
pub fn get_logs_dir() -> Result<PathBuf> {
    let logs_dir = dirs::data_local_dir()
        .context("Failed to get local data directory")?
        .join(config::logging::APP_DIR_NAME)
        .join("logs");

    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs directory: {:?}", logs_dir))?;
    Ok(logs_dir)
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(level: LevelFilter, log_to_file: bool) -> Result<()> {
    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    let file = if log_to_file {
        let appender =
            RollingFileAppender::new(Rotation::DAILY, get_logs_dir()?, config::logging::LOG_FILE_NAME);
        Some(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(appender)
                .with_target(false)
                .with_line_number(true),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(level_filter(level))
        .with(console)
        .with(file)
        .try_init()
        .context("Failed to install tracing subscriber")
}

fn is_rolled_log(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(config::logging::LOG_FILE_NAME))
}

/// Delete rolled log files older than `keep_days`. Returns how many were removed.
pub fn cleanup_old_logs(logs_dir: &Path, keep_days: u32) -> Result<usize> {
    let max_age = Duration::from_secs(u64::from(keep_days) * SECS_PER_DAY);
    let now = SystemTime::now();

    let stale: Vec<PathBuf> = fs::read_dir(logs_dir)
        .with_context(|| format!("Failed to read logs directory: {:?}", logs_dir))?
        .filter_map(|entry| entry.ok())
        .filter(|entry| is_rolled_log(&entry.path()))
        .filter(|entry| {
            entry
                .metadata()
                .and_then(|m| m.modified())
                .ok()
                .and_then(|modified| now.duration_since(modified).ok())
                .is_some_and(|age| age > max_age)
        })
        .map(|entry| entry.path())
        .collect();

    let mut removed = 0;
    for path in stale {
        match fs::remove_file(&path) {
            Ok(()) => {
                removed += 1;
                tracing::debug!(file = ?path, "Deleted old log file");
            }
            Err(e) => tracing::debug!(file = ?path, error = %e, "Could not delete old log file"),
        }
    }
    Ok(removed)
}

/// Run [`cleanup_old_logs`] on a background thread.
pub fn auto_cleanup_old_logs(keep_days: u32) {
    std::thread::spawn(move || {
        let result = get_logs_dir().and_then(|dir| cleanup_old_logs(&dir, keep_days));
        match result {
            Ok(0) => {}
            Ok(count) => tracing::info!(deleted_count = count, "Cleaned up old log files"),
            Err(e) => tracing::warn!(error = %e, "Failed to cleanup old log files"),
        }
    });
}
