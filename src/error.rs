//! Error taxonomy for topology discovery, persistence and placement.

use std::path::PathBuf;

use crate::platform::SurfaceHandle;

/// Failure reported by the platform-access layer.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    /// An OS call reported failure; `code` is the thread's last-error value.
    #[error("{call} failed (os error {code})")]
    CallFailed { call: &'static str, code: u32 },

    /// Geometry that cannot be expressed to the OS (zero size, overflow).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("display topology access is not implemented on {0}")]
    Unsupported(&'static str),
}

/// Errors surfaced by the topology core.
#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    /// Expected on first run; triggers discovery.
    #[error("configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("configuration file {} is malformed: {source}", path.display())]
    ConfigMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access configuration file {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize topology: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("no monitors detected")]
    NoMonitorsDetected,

    /// Recoverable: the first monitor in stored order is used instead.
    #[error("no monitor is marked active, using the first one in the list")]
    NoActiveMonitorSelected,

    #[error("monitor enumeration failed: {0}")]
    EnumerationFailed(#[source] PlatformError),

    #[error("failed to strip decorations from surface {handle}: {source}")]
    StyleUpdateFailed {
        handle: SurfaceHandle,
        #[source]
        source: PlatformError,
    },

    #[error("failed to move surface {handle} onto the target monitor: {source}")]
    PositionUpdateFailed {
        handle: SurfaceHandle,
        #[source]
        source: PlatformError,
    },
}

impl TopologyError {
    /// Whether the process must stop when this error is observed.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            TopologyError::ConfigNotFound { .. } | TopologyError::NoActiveMonitorSelected
        )
    }
}
