//! Platform access
//!
//! The OS display subsystem is reached through one explicitly constructed
//! `DisplayPlatform` object. The monitor enumerator and the placement
//! controller receive it by reference; nothing here lives in ambient
//! globals.
//!
//! - Windows: `Win32Platform` (EnumDisplayMonitors, GetMonitorInfoW,
//!   Get/SetWindowLongW, SetWindowPos)
//! - Everything else: `UnsupportedPlatform`, every call fails

use std::fmt;

use crate::error::PlatformError;
use crate::monitors::MonitorRect;

#[cfg(target_os = "windows")]
pub mod win32;

#[cfg(not(target_os = "windows"))]
pub mod unsupported;

/// Opaque native window handle of the renderable surface (HWND on Windows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceHandle(pub isize);

impl SurfaceHandle {
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SurfaceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// One display as reported by the OS, before conversion to a `MonitorRecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDisplay {
    /// OS device name, e.g. `\\.\DISPLAY1`
    pub device_name: String,
    /// Full monitor area in virtual-desktop coordinates
    pub rect: MonitorRect,
    pub is_primary: bool,
}

/// Target geometry for a single set-position-and-size directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Flags attached to a set-position-and-size directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementFlags {
    /// Keep the current z-order (SWP_NOZORDER)
    pub keep_z_order: bool,
    /// Do not activate or focus the window (SWP_NOACTIVATE)
    pub no_activate: bool,
    /// Recompute the non-client frame after a style change (SWP_FRAMECHANGED)
    pub frame_changed: bool,
}

impl PlacementFlags {
    /// Flags used after stripping decorations.
    pub const REAPPLY_FRAME: PlacementFlags = PlacementFlags {
        keep_z_order: true,
        no_activate: true,
        frame_changed: true,
    };
}

/// Contract every platform must implement to enumerate displays and place
/// the surface.
///
/// Implementations are immutable after construction. `enumerate_displays`
/// calls `visit` synchronously on the calling thread, once per active
/// display, and never concurrently.
pub trait DisplayPlatform {
    /// Enumerate every active display.
    fn enumerate_displays(
        &self,
        visit: &mut dyn FnMut(RawDisplay),
    ) -> Result<(), PlatformError>;

    /// Read the window style bitmask of the surface.
    fn window_style(&self, surface: SurfaceHandle) -> Result<u32, PlatformError>;

    /// Write the window style bitmask of the surface.
    fn set_window_style(&self, surface: SurfaceHandle, style: u32) -> Result<(), PlatformError>;

    /// Move and resize the surface in one directive.
    fn set_window_geometry(
        &self,
        surface: SurfaceHandle,
        geometry: SurfaceGeometry,
        flags: PlacementFlags,
    ) -> Result<(), PlatformError>;
}

impl<P: DisplayPlatform + ?Sized> DisplayPlatform for &P {
    fn enumerate_displays(
        &self,
        visit: &mut dyn FnMut(RawDisplay),
    ) -> Result<(), PlatformError> {
        (**self).enumerate_displays(visit)
    }

    fn window_style(&self, surface: SurfaceHandle) -> Result<u32, PlatformError> {
        (**self).window_style(surface)
    }

    fn set_window_style(&self, surface: SurfaceHandle, style: u32) -> Result<(), PlatformError> {
        (**self).set_window_style(surface, style)
    }

    fn set_window_geometry(
        &self,
        surface: SurfaceHandle,
        geometry: SurfaceGeometry,
        flags: PlacementFlags,
    ) -> Result<(), PlatformError> {
        (**self).set_window_geometry(surface, geometry, flags)
    }
}

/// Platform implementation for the current target.
#[cfg(target_os = "windows")]
pub type NativePlatform = win32::Win32Platform;

/// Platform implementation for the current target.
#[cfg(not(target_os = "windows"))]
pub type NativePlatform = unsupported::UnsupportedPlatform;

/// Construct the platform-access object for the current target.
pub fn create_platform() -> NativePlatform {
    NativePlatform::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_handle_displays_as_hex() {
        assert_eq!(SurfaceHandle(0x2f0c4).to_string(), "0x2f0c4");
        assert!(SurfaceHandle(0).is_null());
        assert!(!SurfaceHandle(1).is_null());
    }

    #[test]
    fn reapply_frame_requests_no_zorder_no_activate_and_frame_change() {
        let flags = PlacementFlags::REAPPLY_FRAME;
        assert!(flags.keep_z_order);
        assert!(flags.no_activate);
        assert!(flags.frame_changed);
    }
}
