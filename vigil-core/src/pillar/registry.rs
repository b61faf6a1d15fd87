use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::Pillar;
use crate::errors::RegistryError;
use crate::score::clamp01;

/// Pillar-specific coverage range.
///
/// An entity's coverage for the pillar is drawn once as `base + spread * u`
/// with `u` uniform in [0, 1). A negative spread means the pillar is usually
/// tracked and jitter only erodes it; a positive spread marks sparse pillars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageProfile {
    pub base: f64,
    pub spread: f64,
}

impl CoverageProfile {
    pub const fn new(base: f64, spread: f64) -> Self {
        Self { base, spread }
    }

    /// Map a uniform draw onto this profile.
    pub fn sample(&self, u: f64) -> f64 {
        clamp01(self.base + self.spread * u)
    }
}

/// Deployment metadata for one pillar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PillarSpec {
    pub pillar: Pillar,
    pub label: String,
    pub description: String,
    pub coverage: CoverageProfile,
    /// Probability that an included read flickers (may read absent regardless
    /// of activation).
    pub flip_rate: f64,
}

impl PillarSpec {
    pub fn new(name: &str, label: &str, description: &str, coverage: CoverageProfile) -> Self {
        Self {
            pillar: Pillar::new(name),
            label: label.to_string(),
            description: description.to_string(),
            coverage,
            flip_rate: 0.12,
        }
    }

    pub fn with_flip_rate(mut self, flip_rate: f64) -> Self {
        self.flip_rate = clamp01(flip_rate);
        self
    }
}

/// The fixed, closed catalog of pillars for one deployment.
///
/// Construction rejects an empty set, so `len()` is always at least 1 and
/// ratios over the pillar count are always defined.
#[derive(Debug, Clone)]
pub struct PillarRegistry {
    specs: Vec<PillarSpec>,
    index: HashMap<Pillar, usize>,
}

impl PillarRegistry {
    pub fn new(specs: Vec<PillarSpec>) -> Result<Self, RegistryError> {
        if specs.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::with_capacity(specs.len());
        for spec in &specs {
            if !seen.insert(&spec.pillar) {
                return Err(RegistryError::DuplicatePillar {
                    name: spec.pillar.name().to_string(),
                });
            }
        }
        Ok(Self::build(specs))
    }

    fn build(specs: Vec<PillarSpec>) -> Self {
        let index = specs
            .iter()
            .enumerate()
            .map(|(i, spec)| (spec.pillar.clone(), i))
            .collect();
        Self { specs, index }
    }

    /// The eight vehicle-domain pillars with their observed coverage profiles.
    pub fn vehicle_default() -> Self {
        let specs = vec![
            PillarSpec::new(
                "dtc_history",
                "DTC History",
                "Diagnostic trouble codes",
                CoverageProfile::new(0.75, -0.15),
            ),
            PillarSpec::new(
                "recall_status",
                "Recall Status",
                "Open recalls",
                CoverageProfile::new(0.90, -0.05),
            ),
            PillarSpec::new(
                "service_history",
                "Service History",
                "Maintenance records",
                CoverageProfile::new(0.65, -0.25),
            ),
            PillarSpec::new(
                "warranty_claims",
                "Warranty Claims",
                "Warranty activity",
                CoverageProfile::new(0.55, -0.25),
            ),
            PillarSpec::new(
                "tsb_applicability",
                "TSB Applicability",
                "Technical service bulletins",
                CoverageProfile::new(0.70, -0.15),
            ),
            PillarSpec::new(
                "field_reports",
                "Field Reports",
                "Field incident reports",
                CoverageProfile::new(0.35, 0.25),
            )
            .with_flip_rate(0.25),
            PillarSpec::new(
                "telematics",
                "Telematics",
                "Connected vehicle data",
                CoverageProfile::new(0.85, -0.10),
            ),
            PillarSpec::new(
                "inspection_results",
                "Inspection Results",
                "Inspection findings",
                CoverageProfile::new(0.40, 0.35),
            ),
        ];
        Self::build(specs)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn get(&self, pillar: &Pillar) -> Option<&PillarSpec> {
        self.index.get(pillar).map(|&i| &self.specs[i])
    }

    pub fn contains(&self, pillar: &Pillar) -> bool {
        self.index.contains_key(pillar)
    }

    pub fn index_of(&self, pillar: &Pillar) -> Option<usize> {
        self.index.get(pillar).copied()
    }

    /// Fail with `UnknownPillar` unless the pillar is registered.
    pub fn require(&self, pillar: &Pillar) -> Result<&PillarSpec, RegistryError> {
        self.get(pillar).ok_or_else(|| RegistryError::UnknownPillar {
            name: pillar.name().to_string(),
        })
    }

    /// Specs in registry order.
    pub fn specs(&self) -> &[PillarSpec] {
        &self.specs
    }

    /// Pillars in registry order.
    pub fn pillars(&self) -> impl Iterator<Item = &Pillar> {
        self.specs.iter().map(|s| &s.pillar)
    }
}
