//! Evidence stream generation.
//!
//! Produces the chronologically ordered observations an entity emits over
//! the estimation window. Missingness comes from rejection: a candidate
//! event on a pillar survives only with that pillar's coverage probability.

use tracing::debug;
use vigil_core::config::EvidenceConfig;
use vigil_core::entity::Entity;
use vigil_core::ids::stable_id;
use vigil_core::models::EvidenceObservation;
use vigil_core::pillar::{Pillar, PillarRegistry, PillarState};
use vigil_core::score::{clamp01, unit_score};
use vigil_core::window::EstimationWindow;

use crate::coverage::CoverageModel;
use crate::rng::RngStream;

pub struct EvidenceStreamGenerator<'a> {
    registry: &'a PillarRegistry,
    config: &'a EvidenceConfig,
}

impl<'a> EvidenceStreamGenerator<'a> {
    pub fn new(registry: &'a PillarRegistry, config: &'a EvidenceConfig) -> Self {
        Self { registry, config }
    }

    /// Generate up to `event_count` observations, sorted by `occurred_at`.
    pub fn generate(
        &self,
        entity: &Entity,
        window: &EstimationWindow,
        coverage: &CoverageModel,
        event_count: u32,
        rng: &mut RngStream,
    ) -> Vec<EvidenceObservation> {
        let mut observations = Vec::with_capacity(event_count as usize);

        for i in 0..event_count {
            let t = clamp01(
                i as f64 / event_count as f64 + rng.jitter(self.config.event_time_jitter),
            );
            let pillar = self.pick_pillar(entity, rng);

            if !rng.chance(coverage.coverage(&pillar)) {
                continue;
            }

            let state = self.pick_state(entity, &pillar, rng);
            let confidence = self.pick_confidence(state, rng);
            let source = self.config.sources[rng.index(self.config.sources.len())].clone();

            observations.push(EvidenceObservation {
                id: stable_id(&entity.id, "observation", i as u64),
                entity_id: entity.id.clone(),
                pillar,
                state,
                confidence,
                source,
                occurred_at: window.at(t),
            });
        }

        observations.sort_by_key(|o| o.occurred_at);
        debug!(
            entity_id = %entity.id,
            candidates = event_count,
            accepted = observations.len(),
            "generated evidence stream"
        );
        observations
    }

    fn pick_pillar(&self, entity: &Entity, rng: &mut RngStream) -> Pillar {
        let relevant = entity.driver.relevant_pillars();
        let off_pattern = rng.chance(self.config.off_pattern_pick_rate);
        if relevant.is_empty() || off_pattern {
            let specs = self.registry.specs();
            specs[rng.index(specs.len())].pillar.clone()
        } else {
            relevant[rng.index(relevant.len())].clone()
        }
    }

    fn pick_state(&self, entity: &Entity, pillar: &Pillar, rng: &mut RngStream) -> PillarState {
        let bias = if entity.driver.is_relevant(pillar) {
            self.config.relevant_present_bias
        } else {
            self.config.background_present_bias
        };
        let r = rng.uniform();
        if r < bias {
            PillarState::Present
        } else if r < bias + self.config.absent_band {
            PillarState::Absent
        } else {
            PillarState::Unknown
        }
    }

    fn pick_confidence(&self, state: PillarState, rng: &mut RngStream) -> f64 {
        let nudge = match state {
            PillarState::Present => self.config.confidence_nudge,
            _ => -self.config.confidence_nudge,
        };
        let raw = self.config.confidence_floor + rng.uniform() * self.config.confidence_range + nudge;
        unit_score(raw, self.config.confidence_precision)
    }
}
