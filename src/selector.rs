//! Monitor selection policy.
//!
//! Linear scan, first match wins:
//! 1. first record with `Active = true`
//! 2. otherwise the first record, with a non-fatal warning
//! 3. empty list fails with `NoMonitorsDetected`

use crate::error::TopologyError;
use crate::monitors::MonitorRecord;

/// Outcome of [`select_target`].
#[derive(Debug)]
pub struct Selection<'a> {
    pub monitor: &'a MonitorRecord,
    /// Position of `monitor` in stored order
    pub index: usize,
    /// Set when no record was explicitly active
    pub warning: Option<TopologyError>,
}

impl Selection<'_> {
    pub fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }
}

pub fn select_target(monitors: &[MonitorRecord]) -> Result<Selection<'_>, TopologyError> {
    if let Some(index) = monitors.iter().position(|m| m.active) {
        let ignored = monitors[index + 1..].iter().filter(|m| m.active).count();
        if ignored > 0 {
            tracing::debug!(
                selected = %monitors[index].name,
                ignored,
                "Multiple monitors marked active, keeping the first"
            );
        }
        return Ok(Selection {
            monitor: &monitors[index],
            index,
            warning: None,
        });
    }

    let first = monitors.first().ok_or(TopologyError::NoMonitorsDetected)?;
    let warning = TopologyError::NoActiveMonitorSelected;
    tracing::warn!(fallback = %first.name, "{}", warning);

    Ok(Selection {
        monitor: first,
        index: 0,
        warning: Some(warning),
    })
}
