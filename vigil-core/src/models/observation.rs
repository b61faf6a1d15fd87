use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pillar::{Pillar, PillarState};

/// One fact about one entity. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceObservation {
    pub id: Uuid,
    pub entity_id: String,
    pub pillar: Pillar,
    pub state: PillarState,
    /// Source-reported confidence in [0, 1].
    pub confidence: f64,
    pub source: String,
    pub occurred_at: DateTime<Utc>,
}
