//! Runtime settings
//!
//! Everything that is not topology (log level, log file, devtools, where
//! the topology file lives) comes from `WALLFRAME_*` environment variables.

use std::path::PathBuf;

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// Topology file location
    pub config_path: PathBuf,
    /// Raw level name, parsed by the logging layer
    pub log_level: String,
    pub log_to_file: bool,
    pub log_retention_days: u32,
    /// Open the surface with developer tools enabled
    pub devtools: bool,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(config::topology::CONFIG_FILE_NAME),
            log_level: config::logging::DEFAULT_LEVEL.to_string(),
            log_to_file: false,
            log_retention_days: config::logging::LOG_RETENTION_DAYS,
            devtools: config::surface::DEFAULT_DEVTOOLS,
        }
    }
}

impl RuntimeSettings {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through `lookup`; unset or unparsable values keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(path) = value(config::env::CONFIG_PATH) {
            settings.config_path = PathBuf::from(path);
        }
        if let Some(level) = value(config::env::LOG_LEVEL) {
            settings.log_level = level;
        }
        if let Some(flag) = value(config::env::LOG_TO_FILE).and_then(|v| parse_flag(&v)) {
            settings.log_to_file = flag;
        }
        if let Some(days) = value(config::env::LOG_RETENTION_DAYS).and_then(|v| v.parse().ok()) {
            settings.log_retention_days = days;
        }
        if let Some(flag) = value(config::env::DEVTOOLS).and_then(|v| parse_flag(&v)) {
            settings.devtools = flag;
        }

        settings
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
