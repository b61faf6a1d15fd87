use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_EVIDENCE_SOURCES;

/// Evidence stream generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvidenceConfig {
    /// Jitter on each event's evenly spaced time fraction.
    pub event_time_jitter: f64,
    /// Probability of picking a pillar uniformly instead of from the driver's
    /// relevant set.
    pub off_pattern_pick_rate: f64,
    /// Probability of `present` for pillars the driver marks relevant.
    pub relevant_present_bias: f64,
    /// Probability of `present` for all other pillars.
    pub background_present_bias: f64,
    /// Width of the `absent` band that follows the present bias.
    pub absent_band: f64,
    pub confidence_floor: f64,
    pub confidence_range: f64,
    /// Added for `present`, subtracted otherwise.
    pub confidence_nudge: f64,
    pub confidence_precision: u32,
    /// Source labels drawn uniformly per observation.
    pub sources: Vec<String>,
}

impl Default for EvidenceConfig {
    fn default() -> Self {
        Self {
            event_time_jitter: defaults::DEFAULT_EVENT_TIME_JITTER,
            off_pattern_pick_rate: defaults::DEFAULT_OFF_PATTERN_PICK_RATE,
            relevant_present_bias: defaults::DEFAULT_RELEVANT_PRESENT_BIAS,
            background_present_bias: defaults::DEFAULT_BACKGROUND_PRESENT_BIAS,
            absent_band: defaults::DEFAULT_ABSENT_BAND,
            confidence_floor: defaults::DEFAULT_CONFIDENCE_FLOOR,
            confidence_range: defaults::DEFAULT_CONFIDENCE_RANGE,
            confidence_nudge: defaults::DEFAULT_CONFIDENCE_NUDGE,
            confidence_precision: defaults::DEFAULT_CONFIDENCE_PRECISION,
            sources: DEFAULT_EVIDENCE_SOURCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
