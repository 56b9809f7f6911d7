//! Fallback for targets without a display topology implementation.

use super::{DisplayPlatform, PlacementFlags, RawDisplay, SurfaceGeometry, SurfaceHandle};
use crate::error::PlatformError;

#[derive(Debug, Default)]
pub struct UnsupportedPlatform;

impl UnsupportedPlatform {
    pub fn new() -> Self {
        tracing::info!(
            os = std::env::consts::OS,
            "Display topology access is only implemented for Windows"
        );
        Self
    }

    fn unsupported<T>() -> Result<T, PlatformError> {
        Err(PlatformError::Unsupported(std::env::consts::OS))
    }
}

impl DisplayPlatform for UnsupportedPlatform {
    fn enumerate_displays(
        &self,
        _visit: &mut dyn FnMut(RawDisplay),
    ) -> Result<(), PlatformError> {
        Self::unsupported()
    }

    fn window_style(&self, _surface: SurfaceHandle) -> Result<u32, PlatformError> {
        Self::unsupported()
    }

    fn set_window_style(&self, _surface: SurfaceHandle, _style: u32) -> Result<(), PlatformError> {
        Self::unsupported()
    }

    fn set_window_geometry(
        &self,
        _surface: SurfaceHandle,
        _geometry: SurfaceGeometry,
        _flags: PlacementFlags,
    ) -> Result<(), PlatformError> {
        Self::unsupported()
    }
}
