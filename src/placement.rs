//! Placement controller
//!
//! Pins an already-created surface to a monitor in two ordered phases:
//!
//! 1. Decoration strip: clear the caption and sizing-border style bits.
//! 2. Geometry apply: one set-position-and-size directive with the exact
//!    monitor bounds, keeping z-order and focus, forcing a frame recompute.
//!
//! Geometry is only applied after the style write succeeded. Applying it
//! over the old style would bake stale frame metrics into the window.

use crate::config::window_style;
use crate::error::{PlatformError, TopologyError};
use crate::monitors::MonitorRecord;
use crate::platform::{DisplayPlatform, PlacementFlags, SurfaceGeometry, SurfaceHandle};

/// Make `surface` borderless and cover `monitor` exactly.
pub fn place_surface<P: DisplayPlatform + ?Sized>(
    platform: &P,
    surface: SurfaceHandle,
    monitor: &MonitorRecord,
) -> Result<(), TopologyError> {
    let geometry = monitor.geometry();
    if geometry.width == 0 || geometry.height == 0 {
        return Err(TopologyError::PositionUpdateFailed {
            handle: surface,
            source: PlatformError::InvalidGeometry(format!(
                "monitor {} has an empty area ({}x{})",
                monitor.name, geometry.width, geometry.height
            )),
        });
    }

    strip_decorations(platform, surface)?;
    apply_geometry(platform, surface, geometry)?;

    tracing::info!(
        surface = %surface,
        monitor = %monitor.name,
        x = geometry.x,
        y = geometry.y,
        width = geometry.width,
        height = geometry.height,
        "Surface placed"
    );
    Ok(())
}

/// Phase 1: clear caption and thick-frame bits. Returns the new style.
pub fn strip_decorations<P: DisplayPlatform + ?Sized>(
    platform: &P,
    surface: SurfaceHandle,
) -> Result<u32, TopologyError> {
    let style_failed = |source: PlatformError| {
        tracing::error!(surface = %surface, error = %source, "Decoration strip rejected");
        TopologyError::StyleUpdateFailed {
            handle: surface,
            source,
        }
    };

    let current = platform.window_style(surface).map_err(style_failed)?;
    let borderless = current & !window_style::DECORATIONS;
    platform
        .set_window_style(surface, borderless)
        .map_err(style_failed)?;

    tracing::debug!(
        surface = %surface,
        before = %format!("{:#010x}", current),
        after = %format!("{:#010x}", borderless),
        "Decorations stripped"
    );
    Ok(borderless)
}

/// Phase 2: move and resize in a single directive.
pub fn apply_geometry<P: DisplayPlatform + ?Sized>(
    platform: &P,
    surface: SurfaceHandle,
    geometry: SurfaceGeometry,
) -> Result<(), TopologyError> {
    platform
        .set_window_geometry(surface, geometry, PlacementFlags::REAPPLY_FRAME)
        .map_err(|source| {
            tracing::error!(surface = %surface, error = %source, "Geometry apply rejected");
            TopologyError::PositionUpdateFailed {
                handle: surface,
                source,
            }
        })
}
