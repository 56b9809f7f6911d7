//! Win32 display topology and window placement
//!
//! Monitors come from EnumDisplayMonitors + GetMonitorInfoW. The surface is
//! made borderless through Get/SetWindowLongW(GWL_STYLE) and placed with a
//! single SetWindowPos call.

use std::ffi::c_void;
use std::mem;

use log::{debug, warn};
use windows::core::BOOL;
use windows::Win32::Foundation::{GetLastError, SetLastError, HWND, LPARAM, RECT, WIN32_ERROR};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO, MONITORINFOEXW,
};
use windows::Win32::UI::HiDpi::{
    SetProcessDpiAwarenessContext, DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2,
};
use windows::Win32::UI::WindowsAndMessaging::{
    GetWindowLongW, SetWindowLongW, SetWindowPos, GWL_STYLE, SET_WINDOW_POS_FLAGS,
    SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOZORDER,
};

use super::{DisplayPlatform, PlacementFlags, RawDisplay, SurfaceGeometry, SurfaceHandle};
use crate::error::PlatformError;
use crate::monitors::MonitorRect;

/// MONITORINFOF_PRIMARY
const MONITORINFOF_PRIMARY: u32 = 0x0000_0001;

/// Win32 implementation of [`DisplayPlatform`].
///
/// Constructing it opts the process into per-monitor DPI awareness so that
/// monitor rectangles and SetWindowPos share physical pixels.
#[derive(Debug)]
pub struct Win32Platform {
    _private: (),
}

impl Win32Platform {
    pub fn new() -> Self {
        unsafe {
            // Fails with ERROR_ACCESS_DENIED when the manifest or the webview
            // host already chose an awareness mode; either way is fine.
            match SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2) {
                Ok(()) => debug!("[PLATFORM] Per-monitor DPI awareness (v2) enabled"),
                Err(e) => debug!("[PLATFORM] DPI awareness left unchanged: {}", e),
            }
        }
        Self { _private: () }
    }
}

impl Default for Win32Platform {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulator handed through LPARAM to `enum_monitor`.
struct EnumContext<'a> {
    visit: &'a mut dyn FnMut(RawDisplay),
    failure: Option<PlatformError>,
}

/// Callback for EnumDisplayMonitors - returns TRUE to continue
unsafe extern "system" fn enum_monitor(
    hmonitor: HMONITOR,
    _hdc: HDC,
    _clip: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    let ctx_ptr = lparam.0 as *mut EnumContext;
    if ctx_ptr.is_null() {
        return BOOL(0);
    }
    let ctx = &mut *ctx_ptr;

    let mut info = MONITORINFOEXW::default();
    info.monitorInfo.cbSize = mem::size_of::<MONITORINFOEXW>() as u32;

    if !GetMonitorInfoW(hmonitor, &mut info as *mut MONITORINFOEXW as *mut MONITORINFO).as_bool() {
        ctx.failure = Some(PlatformError::CallFailed {
            call: "GetMonitorInfoW",
            code: last_error_code(),
        });
        return BOOL(0);
    }

    let rc = info.monitorInfo.rcMonitor;
    (ctx.visit)(RawDisplay {
        device_name: device_name(&info.szDevice),
        rect: MonitorRect {
            left: rc.left,
            top: rc.top,
            right: rc.right,
            bottom: rc.bottom,
        },
        is_primary: info.monitorInfo.dwFlags & MONITORINFOF_PRIMARY != 0,
    });

    BOOL(1)
}

/// Decode a NUL-terminated UTF-16 device name buffer.
fn device_name(buffer: &[u16]) -> String {
    let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
    String::from_utf16_lossy(&buffer[..len])
}

fn last_error_code() -> u32 {
    unsafe { GetLastError().0 }
}

/// Win32 code carried by an HRESULT_FROM_WIN32 error.
fn win32_code(error: &windows::core::Error) -> u32 {
    (error.code().0 as u32) & 0xFFFF
}

fn hwnd(surface: SurfaceHandle) -> HWND {
    HWND(surface.0 as *mut c_void)
}

impl DisplayPlatform for Win32Platform {
    fn enumerate_displays(
        &self,
        visit: &mut dyn FnMut(RawDisplay),
    ) -> Result<(), PlatformError> {
        let mut ctx = EnumContext {
            visit,
            failure: None,
        };

        let ok = unsafe {
            EnumDisplayMonitors(
                None,
                None,
                Some(enum_monitor),
                LPARAM(&mut ctx as *mut EnumContext as isize),
            )
        };

        if let Some(failure) = ctx.failure.take() {
            return Err(failure);
        }
        if !ok.as_bool() {
            return Err(PlatformError::CallFailed {
                call: "EnumDisplayMonitors",
                code: last_error_code(),
            });
        }
        Ok(())
    }

    fn window_style(&self, surface: SurfaceHandle) -> Result<u32, PlatformError> {
        unsafe {
            // GetWindowLongW returns 0 both for failure and for an empty style
            SetLastError(WIN32_ERROR(0));
            let style = GetWindowLongW(hwnd(surface), GWL_STYLE);
            if style == 0 {
                let code = last_error_code();
                if code != 0 {
                    return Err(PlatformError::CallFailed {
                        call: "GetWindowLongW",
                        code,
                    });
                }
            }
            Ok(style as u32)
        }
    }

    fn set_window_style(&self, surface: SurfaceHandle, style: u32) -> Result<(), PlatformError> {
        unsafe {
            // SetWindowLongW returns the previous value, 0 only signals failure
            // when the last error is set
            SetLastError(WIN32_ERROR(0));
            let previous = SetWindowLongW(hwnd(surface), GWL_STYLE, style as i32);
            if previous == 0 {
                let code = last_error_code();
                if code != 0 {
                    return Err(PlatformError::CallFailed {
                        call: "SetWindowLongW",
                        code,
                    });
                }
            }
            debug!(
                "[PLATFORM] Style of {} changed {:#010x} -> {:#010x}",
                surface, previous as u32, style
            );
            Ok(())
        }
    }

    fn set_window_geometry(
        &self,
        surface: SurfaceHandle,
        geometry: SurfaceGeometry,
        flags: PlacementFlags,
    ) -> Result<(), PlatformError> {
        let width = i32::try_from(geometry.width).map_err(|_| {
            PlatformError::InvalidGeometry(format!("width {} exceeds i32", geometry.width))
        })?;
        let height = i32::try_from(geometry.height).map_err(|_| {
            PlatformError::InvalidGeometry(format!("height {} exceeds i32", geometry.height))
        })?;

        let mut swp = SET_WINDOW_POS_FLAGS(0);
        if flags.keep_z_order {
            swp = swp | SWP_NOZORDER;
        }
        if flags.no_activate {
            swp = swp | SWP_NOACTIVATE;
        }
        if flags.frame_changed {
            swp = swp | SWP_FRAMECHANGED;
        }

        unsafe {
            SetWindowPos(
                hwnd(surface),
                None, // ignored because SWP_NOZORDER
                geometry.x,
                geometry.y,
                width,
                height,
                swp,
            )
        }
        .map_err(|e| {
            warn!("[PLATFORM] SetWindowPos FAILED for {}: {}", surface, e);
            PlatformError::CallFailed {
                call: "SetWindowPos",
                code: win32_code(&e),
            }
        })
    }
}
