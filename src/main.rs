use wallframe_core::settings::RuntimeSettings;
use wallframe_core::{create_platform, launch, LaunchOptions, Outcome, StartupEvent, TopologyStore};

// Import modules
mod app_bootstrap;
mod app_lifecycle;
mod logging;
mod single_instance;
mod surface;

use surface::TauriSurface;

// ============================================================================
// Main
// ============================================================================

fn main() {
    let settings = RuntimeSettings::from_env();
    app_bootstrap::init_logging(&settings);
    app_bootstrap::install_panic_hook();
    app_bootstrap::acquire_single_instance_or_exit();

    let store = TopologyStore::new(settings.config_path.clone());
    let options = LaunchOptions {
        debug: settings.devtools,
        ..LaunchOptions::default()
    };

    let result = launch::<TauriSurface, _, _>(&store, create_platform(), &options, report_progress);

    match result {
        Ok(Outcome::Discovered(_)) => {
            log::info!("Discovery finished, exiting");
        }
        Ok(Outcome::SurfaceClosed) => {
            log::info!("Application exiting normally");
        }
        Err(e) => app_lifecycle::exit_fatal(&e),
    }

    app_bootstrap::release_single_instance();
}

/// User-facing console messages for each startup step.
fn report_progress(event: StartupEvent<'_>) {
    match event {
        StartupEvent::ModeSelected(mode) => {
            if mode == wallframe_core::StartupMode::Discover {
                println!("Config file not found, running monitor discovery...");
            }
        }
        StartupEvent::DiscoveryWritten(report) => {
            println!("Wrote {}", report.path.display());
            for (index, monitor) in report.topology.monitors.iter().enumerate() {
                println!(
                    "  [{}] {} {}x{} at ({}, {}){}{}",
                    index,
                    monitor.name,
                    monitor.width,
                    monitor.height,
                    monitor.position_x,
                    monitor.position_y,
                    if monitor.is_primary { " primary" } else { "" },
                    if monitor.active { " active" } else { "" },
                );
            }
            println!("Set \"Active\": true on the target monitor, adjust \"URL\" if needed, then start again.");
        }
        StartupEvent::TargetSelected(plan) => {
            if plan.fallback {
                println!("warning: no monitor marked active, using the first one");
            }
            println!(
                "Using monitor {} (primary: {}) at ({}, {}) size {}x{}",
                plan.monitor.name,
                plan.monitor.is_primary,
                plan.monitor.position_x,
                plan.monitor.position_y,
                plan.monitor.width,
                plan.monitor.height
            );
        }
    }
}
