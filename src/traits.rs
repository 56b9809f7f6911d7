//! Collaborator traits
//!
//! The renderable surface is an external component (a webview window). The
//! core only configures it, receives its native handle once the window
//! exists, and hands control to its event loop.

use crate::platform::SurfaceHandle;

/// Sizing hint forwarded to the surface with `set_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeHint {
    /// Initial size, freely resizable
    #[default]
    None,
    /// Minimum size
    Min,
    /// Maximum size
    Max,
    /// Size cannot be changed by the user
    Fixed,
}

/// Called once with the native handle, after the window exists and before
/// it is shown. An error aborts the surface.
pub type SurfaceReady = Box<dyn FnOnce(SurfaceHandle) -> anyhow::Result<()> + Send + 'static>;

/// Browser-backed display surface.
pub trait RenderSurface {
    /// Create the surface, optionally with developer tools enabled.
    fn create(debug: bool) -> anyhow::Result<Self>
    where
        Self: Sized;

    fn set_size(&mut self, width: u32, height: u32, hint: SizeHint);

    fn set_title(&mut self, title: &str);

    /// Content to load.
    fn navigate(&mut self, url: &str);

    /// Build the native window, call `on_ready` with its handle, then serve
    /// events until the surface is closed. Blocks.
    fn run(self, on_ready: SurfaceReady) -> anyhow::Result<()>;
}
