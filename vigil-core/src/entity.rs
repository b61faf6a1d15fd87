//! The subject being scored.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::models::EvidenceObservation;
use crate::pillar::Pillar;
use crate::traits::EvidenceDriver;

/// A trackable asset with its evidence driver.
///
/// Coverage is normally drawn per entity; `coverage_overrides` pins it for
/// pillars whose coverage is known (backtests). `observations`, when set,
/// replaces the simulated stream with a pre-materialized, time-ordered batch.
#[derive(Clone)]
pub struct Entity {
    pub id: String,
    pub driver: Arc<dyn EvidenceDriver>,
    pub coverage_overrides: BTreeMap<Pillar, f64>,
    pub observations: Option<Vec<EvidenceObservation>>,
}

impl Entity {
    pub fn new(id: impl Into<String>, driver: Arc<dyn EvidenceDriver>) -> Self {
        Self {
            id: id.into(),
            driver,
            coverage_overrides: BTreeMap::new(),
            observations: None,
        }
    }

    pub fn with_coverage(mut self, pillar: impl Into<Pillar>, coverage: f64) -> Self {
        self.coverage_overrides.insert(pillar.into(), coverage);
        self
    }

    /// Pin coverage for every listed pillar.
    pub fn with_coverages<'a>(
        mut self,
        pillars: impl IntoIterator<Item = &'a Pillar>,
        coverage: f64,
    ) -> Self {
        for pillar in pillars {
            self.coverage_overrides.insert(pillar.clone(), coverage);
        }
        self
    }

    pub fn with_observations(mut self, observations: Vec<EvidenceObservation>) -> Self {
        self.observations = Some(observations);
        self
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("driver", &self.driver.name())
            .field("coverage_overrides", &self.coverage_overrides)
            .field(
                "observations",
                &self.observations.as_ref().map(|o| o.len()),
            )
            .finish()
    }
}
