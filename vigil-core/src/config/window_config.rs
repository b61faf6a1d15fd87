use serde::{Deserialize, Serialize};

use super::defaults;

/// Estimation window and per-entity timeline sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Length of the estimation window in days.
    pub window_days: u32,
    /// Inclusive bounds on candidate evidence events per entity.
    pub min_events: u32,
    pub max_events: u32,
    /// Inclusive bounds on timeline checkpoints per entity.
    pub min_frames: u32,
    pub max_frames: u32,
    /// How far before the window start a never-observed pillar is dated.
    pub initial_staleness_days: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            window_days: defaults::DEFAULT_WINDOW_DAYS,
            min_events: defaults::DEFAULT_MIN_EVENTS,
            max_events: defaults::DEFAULT_MAX_EVENTS,
            min_frames: defaults::DEFAULT_MIN_FRAMES,
            max_frames: defaults::DEFAULT_MAX_FRAMES,
            initial_staleness_days: defaults::DEFAULT_INITIAL_STALENESS_DAYS,
        }
    }
}
