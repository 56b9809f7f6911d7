use anyhow::Result;
/// Single Instance Lock
///
/// Only one surface may be pinned at a time.
/// - Windows: named mutex in the session namespace
/// - Elsewhere: no-op guard (the surface cannot be placed there anyway)

/// Single instance lock guard
/// When dropped, the lock is released
pub struct SingleInstanceLock {
    #[cfg(windows)]
    mutex_handle: windows::Win32::Foundation::HANDLE,
}

// SAFETY: HANDLE is thread-safe once created and can be sent between threads.
#[cfg(windows)]
unsafe impl Send for SingleInstanceLock {}
#[cfg(windows)]
unsafe impl Sync for SingleInstanceLock {}

impl SingleInstanceLock {
    /// Returns Err if another instance already holds the lock
    pub fn acquire() -> Result<Self> {
        #[cfg(windows)]
        {
            Self::acquire_windows()
        }

        #[cfg(not(windows))]
        {
            tracing::debug!("Single instance lock not enforced on this platform");
            Ok(Self {})
        }
    }

    #[cfg(windows)]
    fn acquire_windows() -> Result<Self> {
        use anyhow::Context;
        use windows::core::PCWSTR;
        use windows::Win32::Foundation::{CloseHandle, GetLastError, ERROR_ALREADY_EXISTS};
        use windows::Win32::System::Threading::CreateMutexW;

        // Local\ scopes the lock to the current user session
        let mutex_name = "Local\\WallFrame_SingleInstance_Mutex\0";
        let mutex_name_wide: Vec<u16> = mutex_name.encode_utf16().collect();

        unsafe {
            let mutex_handle = CreateMutexW(None, true, PCWSTR(mutex_name_wide.as_ptr()))
                .context("Failed to create mutex")?;

            if GetLastError() == ERROR_ALREADY_EXISTS {
                let _ = CloseHandle(mutex_handle);
                anyhow::bail!("another WallFrame surface holds the instance lock");
            }

            tracing::info!("Single instance lock acquired (Windows Named Mutex)");
            Ok(Self { mutex_handle })
        }
    }
}

impl Drop for SingleInstanceLock {
    fn drop(&mut self) {
        #[cfg(windows)]
        {
            use windows::Win32::Foundation::CloseHandle;
            unsafe {
                let _ = CloseHandle(self.mutex_handle);
            }
            tracing::info!("Single instance lock released (Windows)");
        }
    }
}
