//! Topology store
//!
//! Persists the monitor list and target URL as indented JSON so the file
//! can be edited by hand between runs.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::TopologyError;
use crate::monitors::MonitorRecord;

/// Root record of the topology file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TopologyConfig {
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Monitors")]
    pub monitors: Vec<MonitorRecord>,
}

impl TopologyConfig {
    /// Build a fresh topology, marking the first primary monitor active.
    pub fn discovered(url: impl Into<String>, mut monitors: Vec<MonitorRecord>) -> Self {
        if let Some(primary) = monitors.iter_mut().find(|m| m.is_primary) {
            primary.active = true;
        }
        Self {
            url: url.into(),
            monitors,
        }
    }

    /// Human-readable representation written to disk.
    pub fn to_pretty_json(&self) -> Result<String, TopologyError> {
        serde_json::to_string_pretty(self).map_err(TopologyError::Serialize)
    }
}

/// File-backed store for a single `TopologyConfig`.
#[derive(Debug, Clone)]
pub struct TopologyStore {
    path: PathBuf,
}

impl TopologyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a topology file is present. Never creates anything.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    pub fn load(&self) -> Result<TopologyConfig, TopologyError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                TopologyError::ConfigNotFound {
                    path: self.path.clone(),
                }
            } else {
                TopologyError::ConfigIo {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let topology: TopologyConfig =
            serde_json::from_str(&raw).map_err(|source| TopologyError::ConfigMalformed {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(
            path = %self.path.display(),
            monitors = topology.monitors.len(),
            "Loaded topology"
        );
        Ok(topology)
    }

    /// Replace the stored topology.
    ///
    /// The content goes to a sibling scratch file first and is renamed over
    /// the target, so readers see either the old or the new file.
    pub fn save(&self, topology: &TopologyConfig) -> Result<(), TopologyError> {
        let pretty = topology.to_pretty_json()?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| TopologyError::ConfigIo {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let scratch = self.scratch_path();
        let io_err = |source| TopologyError::ConfigIo {
            path: self.path.clone(),
            source,
        };

        if let Err(source) = fs::write(&scratch, pretty) {
            let _ = fs::remove_file(&scratch);
            return Err(io_err(source));
        }
        if let Err(source) = fs::rename(&scratch, &self.path) {
            let _ = fs::remove_file(&scratch);
            return Err(io_err(source));
        }

        tracing::info!(
            path = %self.path.display(),
            monitors = topology.monitors.len(),
            "Saved topology"
        );
        Ok(())
    }

    fn scratch_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| config::topology::CONFIG_FILE_NAME.into());
        name.push(".");
        name.push(config::topology::TEMP_FILE_SUFFIX);
        self.path.with_file_name(name)
    }
}
