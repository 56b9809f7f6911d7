use lazy_static::lazy_static;
use std::sync::Mutex;

use crate::{logging, single_instance};
use wallframe_core::settings::RuntimeSettings;

lazy_static! {
    // Single instance lock - held for the lifetime of the surface
    static ref SINGLE_INSTANCE_LOCK: Mutex<Option<single_instance::SingleInstanceLock>> =
        Mutex::new(None);
}

/// Acquire the single instance lock or exit if another surface is running.
pub(crate) fn acquire_single_instance_or_exit() {
    let instance_lock = match single_instance::SingleInstanceLock::acquire() {
        Ok(lock) => lock,
        Err(e) => {
            tracing::error!(error = %e, "Another instance is already running");
            eprintln!("WallFrame is already running: {}", e);
            std::process::exit(1);
        }
    };

    if let Ok(mut slot) = SINGLE_INSTANCE_LOCK.lock() {
        *slot = Some(instance_lock);
    }
}

/// Drop the single instance lock, if held.
pub(crate) fn release_single_instance() {
    if let Ok(mut lock) = SINGLE_INSTANCE_LOCK.try_lock() {
        if lock.take().is_some() {
            tracing::debug!("Single instance lock released");
        }
    }
}

/// Initialize logging and print the startup header.
pub(crate) fn init_logging(settings: &RuntimeSettings) {
    let log_level = logging::parse_level(&settings.log_level).unwrap_or_else(|e| {
        eprintln!("{}, falling back to info", e);
        tracing::level_filters::LevelFilter::INFO
    });

    if let Err(e) = logging::init_logging(log_level, settings.log_to_file) {
        eprintln!("Failed to initialize logging: {}", e);
        return;
    }

    tracing::info!("***********************************************************************");
    tracing::info!("*                        WALLFRAME STARTUP                            *");
    tracing::info!("***********************************************************************");
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        platform = std::env::consts::OS,
        log_level = %log_level,
        "Application started"
    );
    tracing::debug!(
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        "Platform details"
    );
    tracing::debug!(
        config_path = %settings.config_path.display(),
        log_to_file = settings.log_to_file,
        log_retention_days = settings.log_retention_days,
        devtools = settings.devtools,
        "Runtime settings"
    );

    if settings.log_to_file {
        logging::auto_cleanup_old_logs(settings.log_retention_days);
    }
}

/// Log panics through tracing before the default hook runs.
pub(crate) fn install_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(?panic_info, "Application panic detected");
        release_single_instance();
        default_panic(panic_info);
    }));
}
