//! Validation of pre-materialized evidence batches from real ingestion.

use vigil_core::errors::EvidenceError;
use vigil_core::models::EvidenceObservation;
use vigil_core::pillar::PillarRegistry;
use vigil_core::score::clamp01;

/// Check a batch for `entity_id` and normalize confidences into [0, 1].
///
/// The batch must belong to the entity, reference only registry pillars,
/// and be ordered by `occurred_at` (ties allowed).
pub fn validate_batch(
    entity_id: &str,
    registry: &PillarRegistry,
    observations: &[EvidenceObservation],
) -> Result<Vec<EvidenceObservation>, EvidenceError> {
    let mut validated = Vec::with_capacity(observations.len());
    let mut previous = None;

    for obs in observations {
        if obs.entity_id != entity_id {
            return Err(EvidenceError::EntityMismatch {
                observation_id: obs.id.to_string(),
                expected: entity_id.to_string(),
                found: obs.entity_id.clone(),
            });
        }
        if !registry.contains(&obs.pillar) {
            return Err(EvidenceError::UnknownPillar {
                observation_id: obs.id.to_string(),
                pillar: obs.pillar.name().to_string(),
            });
        }
        if let Some(prev) = previous {
            if obs.occurred_at < prev {
                return Err(EvidenceError::OutOfOrder {
                    observation_id: obs.id.to_string(),
                    occurred_at: obs.occurred_at,
                    previous: prev,
                });
            }
        }
        if !obs.confidence.is_finite() {
            return Err(EvidenceError::NonFiniteConfidence {
                observation_id: obs.id.to_string(),
            });
        }

        previous = Some(obs.occurred_at);
        let mut obs = obs.clone();
        obs.confidence = clamp01(obs.confidence);
        validated.push(obs);
    }

    Ok(validated)
}
