use crate::app_bootstrap;

/// Log the surface window's shutdown path.
pub(crate) fn handle_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    match event {
        tauri::WindowEvent::CloseRequested { .. } => {
            tracing::info!(label = window.label(), "Surface close requested");
        }
        tauri::WindowEvent::Destroyed => {
            tracing::info!(label = window.label(), "Surface destroyed");
            app_bootstrap::release_single_instance();
        }
        _ => {}
    }
}

/// Report an unrecoverable setup error and terminate with status 1.
pub(crate) fn exit_fatal(error: &anyhow::Error) -> ! {
    tracing::error!(error = %format!("{:#}", error), "Fatal error, exiting");
    eprintln!("error: {:#}", error);
    app_bootstrap::release_single_instance();
    std::process::exit(1);
}
