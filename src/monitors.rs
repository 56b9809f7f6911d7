//! Monitor records and the enumeration pass that produces them.

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;
use crate::platform::{DisplayPlatform, SurfaceGeometry};

/// One physical display as persisted in the topology file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MonitorRecord {
    /// OS-assigned device identifier, e.g. `\\.\DISPLAY1`
    pub name: String,
    pub is_primary: bool,
    /// User-controlled selection flag; the first active record wins
    pub active: bool,
    /// Virtual-desktop offsets, negative left of / above the primary
    pub position_x: i32,
    pub position_y: i32,
    pub width: u32,
    pub height: u32,
}

impl MonitorRecord {
    /// Exact monitor bounds as a surface geometry.
    pub fn geometry(&self) -> SurfaceGeometry {
        SurfaceGeometry {
            x: self.position_x,
            y: self.position_y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Raw monitor rectangle as reported by the OS (right/bottom exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonitorRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl MonitorRect {
    pub fn width(&self) -> u32 {
        span(self.left, self.right)
    }

    pub fn height(&self) -> u32 {
        span(self.top, self.bottom)
    }

    /// Convert to a record; `active` always starts false.
    pub fn to_record(&self, name: impl Into<String>, is_primary: bool) -> MonitorRecord {
        MonitorRecord {
            name: name.into(),
            is_primary,
            active: false,
            position_x: self.left,
            position_y: self.top,
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Distance from `start` to `end`, zero when inverted. Never overflows.
fn span(start: i32, end: i32) -> u32 {
    (i64::from(end) - i64::from(start)).clamp(0, i64::from(u32::MAX)) as u32
}

/// Enumerate every active display, in OS order.
///
/// The order is not guaranteed to follow physical left-to-right placement,
/// nor to stay stable across reboots. An empty result is reported as
/// `NoMonitorsDetected`.
pub fn enumerate_monitors<P: DisplayPlatform + ?Sized>(
    platform: &P,
) -> Result<Vec<MonitorRecord>, TopologyError> {
    let mut monitors: Vec<MonitorRecord> = Vec::new();

    platform
        .enumerate_displays(&mut |display| {
            monitors.push(display.rect.to_record(display.device_name, display.is_primary));
        })
        .map_err(TopologyError::EnumerationFailed)?;

    if monitors.is_empty() {
        tracing::error!("Display enumeration returned no monitors");
        return Err(TopologyError::NoMonitorsDetected);
    }

    tracing::info!(count = monitors.len(), "Enumerated monitors");
    for (index, monitor) in monitors.iter().enumerate() {
        tracing::debug!(
            index,
            name = %monitor.name,
            is_primary = monitor.is_primary,
            x = monitor.position_x,
            y = monitor.position_y,
            width = monitor.width,
            height = monitor.height,
            "Monitor"
        );
    }

    Ok(monitors)
}
