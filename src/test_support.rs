//! In-crate fakes for the platform layer.

use std::sync::{Arc, Mutex};

use crate::error::PlatformError;
use crate::monitors::MonitorRect;
use crate::platform::{DisplayPlatform, PlacementFlags, RawDisplay, SurfaceGeometry, SurfaceHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Enumerate,
    GetStyle(SurfaceHandle),
    SetStyle(SurfaceHandle, u32),
    SetGeometry(SurfaceHandle, SurfaceGeometry, PlacementFlags),
}

/// Platform fake that records every call. Clones share the call log.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlatform {
    style: u32,
    displays: Vec<RawDisplay>,
    fail_style_read: bool,
    fail_style_write: bool,
    fail_geometry: bool,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingPlatform {
    pub fn with_style(style: u32) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    pub fn with_displays(displays: Vec<RawDisplay>) -> Self {
        Self {
            style: 0x00CF_0000,
            displays,
            ..Default::default()
        }
    }

    pub fn failing_style_read(mut self) -> Self {
        self.fail_style_read = true;
        self
    }

    pub fn failing_style_write(mut self) -> Self {
        self.fail_style_write = true;
        self
    }

    pub fn failing_geometry(mut self) -> Self {
        self.fail_geometry = true;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

pub fn display(name: &str, left: i32, top: i32, right: i32, bottom: i32, primary: bool) -> RawDisplay {
    RawDisplay {
        device_name: name.to_string(),
        rect: MonitorRect {
            left,
            top,
            right,
            bottom,
        },
        is_primary: primary,
    }
}

// ERROR_INVALID_WINDOW_HANDLE
const INVALID_HANDLE: u32 = 1400;

impl DisplayPlatform for RecordingPlatform {
    fn enumerate_displays(
        &self,
        visit: &mut dyn FnMut(RawDisplay),
    ) -> Result<(), PlatformError> {
        self.record(Call::Enumerate);
        for display in &self.displays {
            visit(display.clone());
        }
        Ok(())
    }

    fn window_style(&self, surface: SurfaceHandle) -> Result<u32, PlatformError> {
        self.record(Call::GetStyle(surface));
        if self.fail_style_read {
            return Err(PlatformError::CallFailed {
                call: "GetWindowLongW",
                code: INVALID_HANDLE,
            });
        }
        Ok(self.style)
    }

    fn set_window_style(&self, surface: SurfaceHandle, style: u32) -> Result<(), PlatformError> {
        self.record(Call::SetStyle(surface, style));
        if self.fail_style_write {
            return Err(PlatformError::CallFailed {
                call: "SetWindowLongW",
                code: INVALID_HANDLE,
            });
        }
        Ok(())
    }

    fn set_window_geometry(
        &self,
        surface: SurfaceHandle,
        geometry: SurfaceGeometry,
        flags: PlacementFlags,
    ) -> Result<(), PlatformError> {
        self.record(Call::SetGeometry(surface, geometry, flags));
        if self.fail_geometry {
            return Err(PlatformError::CallFailed {
                call: "SetWindowPos",
                code: INVALID_HANDLE,
            });
        }
        Ok(())
    }
}
