//! Application Configuration Constants
//!
//! Centralized configuration for defaults, file names and the platform
//! bit masks used while placing the surface.

/// Topology file defaults
pub mod topology {
    /// Topology file name, resolved against the working directory
    pub const CONFIG_FILE_NAME: &str = "config.json";

    /// Suffix of the scratch file written before the atomic rename
    pub const TEMP_FILE_SUFFIX: &str = "tmp";

    /// URL written into a freshly discovered topology
    pub const DEFAULT_URL: &str = "http://localhost:3100/#/columns-fullscreen";
}

/// Renderable surface defaults
pub mod surface {
    /// Window title shown in the taskbar and alt-tab
    pub const WINDOW_TITLE: &str = "WallFrame";

    /// Label of the single webview window
    pub const WINDOW_LABEL: &str = "wallframe-surface";

    /// Devtools are enabled unless explicitly turned off
    pub const DEFAULT_DEVTOOLS: bool = true;
}

/// Win32 window style bits touched by the placement controller
pub mod window_style {
    /// WS_CAPTION: title bar (WS_BORDER | WS_DLGFRAME)
    pub const CAPTION: u32 = 0x00C0_0000;

    /// WS_THICKFRAME: resizable sizing border
    pub const THICK_FRAME: u32 = 0x0004_0000;

    /// Bits cleared to make the surface borderless
    pub const DECORATIONS: u32 = CAPTION | THICK_FRAME;
}

/// Environment variables read by `RuntimeSettings`
pub mod env {
    pub const CONFIG_PATH: &str = "WALLFRAME_CONFIG";
    pub const LOG_LEVEL: &str = "WALLFRAME_LOG";
    pub const LOG_TO_FILE: &str = "WALLFRAME_LOG_FILE";
    pub const LOG_RETENTION_DAYS: &str = "WALLFRAME_LOG_RETENTION_DAYS";
    pub const DEVTOOLS: &str = "WALLFRAME_DEVTOOLS";
}

/// Logging defaults
pub mod logging {
    /// Level used when `WALLFRAME_LOG` is unset or invalid
    pub const DEFAULT_LEVEL: &str = "info";

    /// Log retention period in days
    pub const LOG_RETENTION_DAYS: u32 = 14;

    /// Directory name under the platform data dir
    pub const APP_DIR_NAME: &str = "WallFrame";

    /// Rolling log file prefix
    pub const LOG_FILE_NAME: &str = "wallframe.log";
}
