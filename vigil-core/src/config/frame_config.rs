use serde::{Deserialize, Serialize};

use super::defaults;

/// Per-checkpoint pillar sampling and aggregate parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    /// Activation for relevant pillars: `base + slope * t + jitter`.
    pub relevant_activation_base: f64,
    pub relevant_activation_slope: f64,
    pub relevant_activation_jitter: f64,
    /// Activation for all other pillars: `base + jitter`.
    pub background_activation_base: f64,
    pub background_activation_jitter: f64,
    /// Chance a flickering read lands on `absent`.
    pub flicker_absent_rate: f64,
    /// Chance an inactive included read is `absent` rather than `unknown`.
    pub unknown_absent_rate: f64,
    /// Multiplier on the absent/observed ratio.
    pub conflict_gain: f64,
    /// Age (days) at which the staleness penalty saturates at 1.0.
    pub staleness_horizon_days: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            relevant_activation_base: defaults::DEFAULT_RELEVANT_ACTIVATION_BASE,
            relevant_activation_slope: defaults::DEFAULT_RELEVANT_ACTIVATION_SLOPE,
            relevant_activation_jitter: defaults::DEFAULT_RELEVANT_ACTIVATION_JITTER,
            background_activation_base: defaults::DEFAULT_BACKGROUND_ACTIVATION_BASE,
            background_activation_jitter: defaults::DEFAULT_BACKGROUND_ACTIVATION_JITTER,
            flicker_absent_rate: defaults::DEFAULT_FLICKER_ABSENT_RATE,
            unknown_absent_rate: defaults::DEFAULT_UNKNOWN_ABSENT_RATE,
            conflict_gain: defaults::DEFAULT_CONFLICT_GAIN,
            staleness_horizon_days: defaults::DEFAULT_STALENESS_HORIZON_DAYS,
        }
    }
}
