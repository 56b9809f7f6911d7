//! WallFrame - Display Topology Core
//!
//! Monitor discovery, topology persistence, target selection and borderless
//! placement of a webview surface on one physical monitor.

// Configuration constants
pub mod config;

// Error taxonomy
pub mod error;

// Platform access (Win32 or unsupported fallback)
pub mod platform;

pub mod monitors;
pub mod topology;
pub mod selector;
pub mod placement;
pub mod orchestrator;

// Renderable surface collaborator
pub mod traits;

// Environment-driven runtime settings
pub mod settings;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{PlatformError, TopologyError};
pub use monitors::{enumerate_monitors, MonitorRecord};
pub use orchestrator::{launch, LaunchOptions, Outcome, StartupEvent, StartupMode};
pub use placement::place_surface;
pub use platform::{create_platform, DisplayPlatform, SurfaceHandle};
pub use selector::select_target;
pub use topology::{TopologyConfig, TopologyStore};
pub use traits::{RenderSurface, SizeHint};
