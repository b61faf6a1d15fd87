//! Coverage model: the probability that each pillar is observed at all.

use std::collections::BTreeMap;

use vigil_core::errors::RegistryError;
use vigil_core::pillar::{Pillar, PillarRegistry};
use vigil_core::score::clamp01;

use crate::rng::RngStream;

/// Per-entity coverage, one value per registry pillar. Fixed for the
/// entity's lifetime once drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageModel {
    values: BTreeMap<Pillar, f64>,
}

impl CoverageModel {
    /// Draw one coverage per pillar, in registry order, from its profile.
    pub fn draw(registry: &PillarRegistry, rng: &mut RngStream) -> Self {
        let values = registry
            .specs()
            .iter()
            .map(|spec| (spec.pillar.clone(), spec.coverage.sample(rng.uniform())))
            .collect();
        Self { values }
    }

    /// Same coverage for every pillar.
    pub fn uniform(registry: &PillarRegistry, coverage: f64) -> Self {
        let coverage = clamp01(coverage);
        Self {
            values: registry.pillars().map(|p| (p.clone(), coverage)).collect(),
        }
    }

    /// Replace one pillar's coverage.
    pub fn with_override(mut self, pillar: &Pillar, coverage: f64) -> Self {
        if let Some(value) = self.values.get_mut(pillar) {
            *value = clamp01(coverage);
        }
        self
    }

    /// Apply an entity's overrides. Overrides must name registry pillars.
    pub fn apply_overrides(
        mut self,
        overrides: &BTreeMap<Pillar, f64>,
    ) -> Result<Self, RegistryError> {
        for (pillar, &coverage) in overrides {
            match self.values.get_mut(pillar) {
                Some(value) => *value = clamp01(coverage),
                None => {
                    return Err(RegistryError::UnknownPillar {
                        name: pillar.name().to_string(),
                    })
                }
            }
        }
        Ok(self)
    }

    /// Coverage for a pillar; 0.0 for pillars outside the registry.
    pub fn coverage(&self, pillar: &Pillar) -> f64 {
        self.values.get(pillar).copied().unwrap_or(0.0)
    }

    /// Expected number of pillars included in one frame.
    pub fn expected_observed(&self) -> f64 {
        self.values.values().sum()
    }

    /// Expected `missing_penalty` of one frame: `1 − mean coverage`.
    pub fn expected_missing_penalty(&self) -> f64 {
        if self.values.is_empty() {
            return 1.0;
        }
        clamp01(1.0 - self.expected_observed() / self.values.len() as f64)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pillar, f64)> {
        self.values.iter().map(|(p, &v)| (p, v))
    }
}
