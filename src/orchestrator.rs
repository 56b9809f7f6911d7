//! Startup orchestration
//!
//! `Start -> {Discover, Run} -> Terminal`
//!
//! - Discover (no topology file): enumerate monitors, mark the primary one
//!   active, write the file and stop. Nothing is rendered in this run.
//! - Run (topology file present): load, select the target monitor, configure
//!   the surface, place it once its window exists, then serve its events
//!   until it is closed.

use std::path::PathBuf;

use anyhow::Context;

use crate::config;
use crate::error::TopologyError;
use crate::monitors::{enumerate_monitors, MonitorRecord};
use crate::placement::place_surface;
use crate::platform::DisplayPlatform;
use crate::selector::select_target;
use crate::topology::{TopologyConfig, TopologyStore};
use crate::traits::{RenderSurface, SizeHint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupMode {
    Discover,
    Run,
}

/// Pick the startup branch from topology presence alone.
pub fn startup_mode(store: &TopologyStore) -> StartupMode {
    if store.exists() {
        StartupMode::Run
    } else {
        StartupMode::Discover
    }
}

/// Result of a discovery pass.
#[derive(Debug, Clone)]
pub struct DiscoveryReport {
    pub path: PathBuf,
    pub topology: TopologyConfig,
}

impl DiscoveryReport {
    /// Monitor pre-selected for the next run, if a primary was reported.
    pub fn active_monitor(&self) -> Option<&MonitorRecord> {
        self.topology.monitors.iter().find(|m| m.active)
    }
}

/// Enumerate monitors and persist a fresh topology pointing at `url`.
pub fn discover<P: DisplayPlatform + ?Sized>(
    platform: &P,
    store: &TopologyStore,
    url: &str,
) -> Result<DiscoveryReport, TopologyError> {
    let monitors = enumerate_monitors(platform)?;
    let topology = TopologyConfig::discovered(url, monitors);

    if topology.monitors.iter().all(|m| !m.active) {
        tracing::warn!("No monitor reported as primary, none pre-selected");
    }

    store.save(&topology)?;
    Ok(DiscoveryReport {
        path: store.path().to_path_buf(),
        topology,
    })
}

/// Everything the run branch needs once the topology is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPlan {
    pub url: String,
    pub monitor: MonitorRecord,
    /// Position of `monitor` in the topology file
    pub index: usize,
    /// The monitor was chosen because none was marked active
    pub fallback: bool,
}

/// Load the topology and select the target monitor.
pub fn plan_run(store: &TopologyStore) -> Result<RunPlan, TopologyError> {
    let topology = store.load()?;
    let selection = select_target(&topology.monitors)?;

    let plan = RunPlan {
        url: topology.url.clone(),
        monitor: selection.monitor.clone(),
        index: selection.index,
        fallback: selection.is_fallback(),
    };

    tracing::info!(
        monitor = %plan.monitor.name,
        index = plan.index,
        is_primary = plan.monitor.is_primary,
        x = plan.monitor.position_x,
        y = plan.monitor.position_y,
        width = plan.monitor.width,
        height = plan.monitor.height,
        fallback = plan.fallback,
        "Target monitor selected"
    );
    Ok(plan)
}

/// Configure `surface` for `plan`, place it when its window exists and run
/// it until closed.
pub fn present<S, P>(plan: &RunPlan, mut surface: S, platform: P) -> anyhow::Result<()>
where
    S: RenderSurface,
    P: DisplayPlatform + Send + 'static,
{
    surface.set_size(plan.monitor.width, plan.monitor.height, SizeHint::None);
    surface.set_title(config::surface::WINDOW_TITLE);
    surface.navigate(&plan.url);

    let monitor = plan.monitor.clone();
    surface.run(Box::new(move |handle| {
        place_surface(&platform, handle, &monitor)
            .with_context(|| format!("could not place the surface on {}", monitor.name))
    }))
}

/// Progress notifications emitted by [`launch`].
#[derive(Debug)]
pub enum StartupEvent<'a> {
    ModeSelected(StartupMode),
    DiscoveryWritten(&'a DiscoveryReport),
    TargetSelected(&'a RunPlan),
}

/// How a successful [`launch`] ended.
#[derive(Debug)]
pub enum Outcome {
    /// Topology written, user must review it and start again
    Discovered(DiscoveryReport),
    /// The surface was closed
    SurfaceClosed,
}

/// Options for [`launch`].
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    /// URL written into a discovered topology
    pub default_url: String,
    /// Create the surface with developer tools
    pub debug: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            default_url: config::topology::DEFAULT_URL.to_string(),
            debug: config::surface::DEFAULT_DEVTOOLS,
        }
    }
}

/// Run the whole startup state machine. Every error is fatal.
pub fn launch<S, P, F>(
    store: &TopologyStore,
    platform: P,
    options: &LaunchOptions,
    mut on_event: F,
) -> anyhow::Result<Outcome>
where
    S: RenderSurface,
    P: DisplayPlatform + Send + 'static,
    F: FnMut(StartupEvent<'_>),
{
    let mode = startup_mode(store);
    tracing::info!(mode = ?mode, path = %store.path().display(), "Startup mode");
    on_event(StartupEvent::ModeSelected(mode));

    match mode {
        StartupMode::Discover => {
            let report = discover(&platform, store, &options.default_url)
                .context("monitor discovery failed")?;
            on_event(StartupEvent::DiscoveryWritten(&report));
            Ok(Outcome::Discovered(report))
        }
        StartupMode::Run => {
            let plan = plan_run(store)
                .with_context(|| format!("cannot use {}", store.path().display()))?;
            on_event(StartupEvent::TargetSelected(&plan));

            let surface = S::create(options.debug).context("failed to create the surface")?;
            present(&plan, surface, platform)?;
            tracing::info!("Surface closed");
            Ok(Outcome::SurfaceClosed)
        }
    }
}
