use chrono::{DateTime, Utc};

use super::error_code::{self, VigilErrorCode};

/// Errors in a pre-materialized evidence batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvidenceError {
    #[error("observation {observation_id} belongs to {found}, expected {expected}")]
    EntityMismatch {
        observation_id: String,
        expected: String,
        found: String,
    },

    #[error("observation {observation_id} references unknown pillar {pillar}")]
    UnknownPillar {
        observation_id: String,
        pillar: String,
    },

    #[error("observation {observation_id} at {occurred_at} precedes {previous}")]
    OutOfOrder {
        observation_id: String,
        occurred_at: DateTime<Utc>,
        previous: DateTime<Utc>,
    },

    #[error("observation {observation_id} has non-finite confidence")]
    NonFiniteConfidence { observation_id: String },
}

impl VigilErrorCode for EvidenceError {
    fn error_code(&self) -> &'static str {
        error_code::EVIDENCE_ERROR
    }
}
