use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EvidenceObservation, PosteriorSnapshot, RiskBand};

/// Latest posterior for an entity, as written back to the entity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub entity_id: String,
    pub p: f64,
    pub c: f64,
    pub s: f64,
    pub risk_band: RiskBand,
    pub frame_count: u32,
    pub observation_count: usize,
    /// Most recent observation, or the window start when there is none.
    pub last_event_at: DateTime<Utc>,
}

/// Everything the engine produced for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityAssessment {
    pub entity_id: String,
    pub observations: Vec<EvidenceObservation>,
    pub snapshots: Vec<PosteriorSnapshot>,
    pub summary: EntitySummary,
}

impl EntityAssessment {
    pub fn latest(&self) -> Option<&PosteriorSnapshot> {
        self.snapshots.last()
    }
}
