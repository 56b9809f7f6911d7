#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use wallframe_core::monitors::MonitorRect;
use wallframe_core::platform::{PlacementFlags, RawDisplay, SurfaceGeometry};
use wallframe_core::{DisplayPlatform, PlatformError, SurfaceHandle};

pub struct TempDir {
    pub path: PathBuf,
}

impl TempDir {
    pub fn new(label: &str) -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("wallframe_test_{}_{}_{}", label, std::process::id(), nanos));
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Fixed display layout; placement calls are recorded as strings.
#[derive(Clone, Default)]
pub struct FakeDisplays {
    pub displays: Vec<RawDisplay>,
    pub style: u32,
    pub log: Arc<Mutex<Vec<String>>>,
}

impl FakeDisplays {
    pub fn new(displays: Vec<RawDisplay>) -> Self {
        Self {
            displays,
            style: 0x16CF_0000,
            log: Arc::default(),
        }
    }

    pub fn log(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl DisplayPlatform for FakeDisplays {
    fn enumerate_displays(&self, visit: &mut dyn FnMut(RawDisplay)) -> Result<(), PlatformError> {
        for display in &self.displays {
            visit(display.clone());
        }
        Ok(())
    }

    fn window_style(&self, surface: SurfaceHandle) -> Result<u32, PlatformError> {
        self.log.lock().unwrap().push(format!("get_style {surface}"));
        Ok(self.style)
    }

    fn set_window_style(&self, surface: SurfaceHandle, style: u32) -> Result<(), PlatformError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("set_style {surface} {style:#010x}"));
        Ok(())
    }

    fn set_window_geometry(
        &self,
        surface: SurfaceHandle,
        geometry: SurfaceGeometry,
        flags: PlacementFlags,
    ) -> Result<(), PlatformError> {
        assert_eq!(flags, PlacementFlags::REAPPLY_FRAME);
        self.log.lock().unwrap().push(format!(
            "set_geometry {surface} {},{} {}x{}",
            geometry.x, geometry.y, geometry.width, geometry.height
        ));
        Ok(())
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
