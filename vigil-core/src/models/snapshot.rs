use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::RiskBand;
use crate::pillar::{Pillar, PillarState};

/// Pillar → state sampled at one checkpoint. Ordered so serialized
/// snapshots are byte-stable.
pub type PillarVector = BTreeMap<Pillar, PillarState>;

/// One timeline checkpoint for one entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosteriorSnapshot {
    pub id: Uuid,
    pub entity_id: String,
    pub frame_index: u32,
    pub computed_at: DateTime<Utc>,
    /// Probability of the underlying condition.
    pub p: f64,
    /// Confidence in the current read.
    pub c: f64,
    /// Severity.
    pub s: f64,
    pub risk_band: RiskBand,
    pub pillar_vector: PillarVector,
}

impl PosteriorSnapshot {
    /// Whether the stored band still matches the stored P.
    pub fn band_is_consistent(&self) -> bool {
        RiskBand::classify(self.p) == self.risk_band
    }
}
