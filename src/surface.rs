//! Tauri-backed render surface
//!
//! The webview window is built hidden inside the setup hook so it can be
//! stripped and moved before the first frame is shown.

use anyhow::Context;
use tauri::{WebviewUrl, WebviewWindowBuilder};

use wallframe_core::config;
use wallframe_core::traits::{RenderSurface, SurfaceReady};
use wallframe_core::{SizeHint, SurfaceHandle};

use crate::app_lifecycle;

pub(crate) struct TauriSurface {
    debug: bool,
    title: String,
    url: Option<String>,
    width: u32,
    height: u32,
    hint: SizeHint,
}

impl RenderSurface for TauriSurface {
    fn create(debug: bool) -> anyhow::Result<Self> {
        tracing::debug!(debug, "Creating Tauri surface");
        Ok(Self {
            debug,
            title: config::surface::WINDOW_TITLE.to_string(),
            url: None,
            width: 0,
            height: 0,
            hint: SizeHint::None,
        })
    }

    fn set_size(&mut self, width: u32, height: u32, hint: SizeHint) {
        self.width = width;
        self.height = height;
        self.hint = hint;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn navigate(&mut self, url: &str) {
        self.url = Some(url.to_string());
    }

    fn run(self, on_ready: SurfaceReady) -> anyhow::Result<()> {
        let raw_url = self.url.clone().context("no content URL was set")?;
        let url = tauri::Url::parse(&raw_url)
            .with_context(|| format!("invalid content URL: {}", raw_url))?;
        let chrome = self.chrome();

        let app = tauri::Builder::default()
            .setup(move |app| {
                let (w, h) = (self.width as f64, self.height as f64);
                let mut builder =
                    WebviewWindowBuilder::new(app, config::surface::WINDOW_LABEL, WebviewUrl::External(url))
                        .title(&self.title)
                        .inner_size(w, h)
                        .decorations(chrome.decorations)
                        .shadow(chrome.shadow)
                        .resizable(chrome.resizable)
                        .visible(chrome.visible);

                builder = match self.hint {
                    SizeHint::Min => builder.min_inner_size(w, h),
                    SizeHint::Max => builder.max_inner_size(w, h),
                    SizeHint::None | SizeHint::Fixed => builder,
                };

                let window = builder.build()?;
                let handle = native_handle(&window)?;
                tracing::info!(handle = %handle, label = window.label(), "Surface window created");
                if handle.is_null() {
                    tracing::warn!("Surface has no native window handle");
                }

                if let Err(e) = on_ready(handle) {
                    app_lifecycle::exit_fatal(&e);
                }

                window.show()?;
                if self.debug {
                    window.open_devtools();
                }
                Ok(())
            })
            .on_window_event(app_lifecycle::handle_window_event)
            .build(tauri::generate_context!())
            .context("failed to build the surface application")?;

        let exit_code = app.run_return(|_, _| {});
        if exit_code != 0 {
            anyhow::bail!("surface event loop exited with status {}", exit_code);
        }
        Ok(())
    }
}

/// Window flags handed to the builder.
///
/// The window toolkit rewrites the native style from its own flags whenever
/// visibility changes, so they must already describe a borderless window
/// before `show()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WindowChrome {
    decorations: bool,
    shadow: bool,
    resizable: bool,
    visible: bool,
}

impl TauriSurface {
    fn chrome(&self) -> WindowChrome {
        WindowChrome {
            decorations: false,
            shadow: false,
            resizable: self.hint != SizeHint::Fixed,
            visible: false,
        }
    }
}

#[cfg(windows)]
fn native_handle(window: &tauri::WebviewWindow) -> tauri::Result<SurfaceHandle> {
    Ok(SurfaceHandle(window.hwnd()?.0 as isize))
}

#[cfg(not(windows))]
fn native_handle(_window: &tauri::WebviewWindow) -> tauri::Result<SurfaceHandle> {
    Ok(SurfaceHandle(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(hint: SizeHint) -> TauriSurface {
        let mut surface = TauriSurface::create(false).unwrap();
        surface.set_size(1920, 1080, hint);
        surface.navigate("http://localhost:3100/");
        surface
    }

    #[test]
    fn window_is_built_borderless_and_hidden() {
        let chrome = configured(SizeHint::None).chrome();
        assert!(!chrome.decorations);
        assert!(!chrome.shadow);
        assert!(!chrome.visible);
        assert!(chrome.resizable);
    }

    #[test]
    fn fixed_hint_disables_resizing_but_stays_borderless() {
        let chrome = configured(SizeHint::Fixed).chrome();
        assert!(!chrome.resizable);
        assert!(!chrome.decorations);
    }

    #[test]
    fn invalid_url_fails_before_any_window_exists() {
        let mut surface = configured(SizeHint::None);
        surface.navigate("not a url");
        let err = surface.run(Box::new(|_| Ok(()))).unwrap_err();
        assert!(err.to_string().contains("invalid content URL"));
    }
}
