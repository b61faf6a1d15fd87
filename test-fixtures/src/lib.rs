//! Shared fixtures for Vigil integration tests, property tests, and benches.
//!
//! Everything here is deterministic: a fixed window end, fixed drivers, and
//! a config with posterior noise switched off for calibration scenarios.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use vigil_core::config::VigilConfig;
use vigil_core::entity::Entity;
use vigil_core::ids::stable_id;
use vigil_core::models::EvidenceObservation;
use vigil_core::pillar::{Pillar, PillarRegistry, PillarState};
use vigil_core::traits::{EvidenceDriver, FixedDriver};
use vigil_core::window::EstimationWindow;

/// End of the estimation window used across tests.
pub fn window_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

/// Default 90-day window ending at [`window_end`].
pub fn default_window() -> EstimationWindow {
    EstimationWindow::ending_at(window_end(), &VigilConfig::default().window).unwrap()
}

pub fn registry() -> PillarRegistry {
    PillarRegistry::vehicle_default()
}

/// Default config with every posterior jitter term zeroed.
pub fn quiet_config() -> VigilConfig {
    let mut config = VigilConfig::default();
    config.posterior = config.posterior.without_jitter();
    config
}

/// Entity with constant targets and no coverage overrides.
pub fn fixed_entity(id: &str, p: f64, s: f64, relevant: &[&str]) -> Entity {
    let driver = FixedDriver::new(p, s).with_relevant(relevant.iter().copied());
    Entity::new(id, Arc::new(driver))
}

/// Pin coverage for every registry pillar.
pub fn with_full_coverage(entity: Entity, coverage: f64) -> Entity {
    let registry = registry();
    entity.with_coverages(registry.pillars(), coverage)
}

/// Entity ids `veh-000`, `veh-001`, ...
pub fn fleet_ids(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("veh-{i:03}")).collect()
}

/// Observation `days_in` days after the default window start.
pub fn observation_at(
    entity_id: &str,
    index: u64,
    pillar: &str,
    state: PillarState,
    days_in: i64,
) -> EvidenceObservation {
    EvidenceObservation {
        id: stable_id(entity_id, "fixture-observation", index),
        entity_id: entity_id.to_string(),
        pillar: Pillar::new(pillar),
        state,
        confidence: 0.8,
        source: "Dealer Report".to_string(),
        occurred_at: default_window().start + Duration::days(days_in),
    }
}

/// Driver whose targets are out of range or NaN, to exercise sanitization.
#[derive(Debug)]
pub struct UnrulyDriver;

impl EvidenceDriver for UnrulyDriver {
    fn target_p(&self, t: f64) -> f64 {
        if t < 0.5 {
            f64::NAN
        } else {
            1.7
        }
    }

    fn target_s(&self, _t: f64) -> f64 {
        -0.4
    }

    fn relevant_pillars(&self) -> &[Pillar] {
        &[]
    }

    fn name(&self) -> &str {
        "unruly"
    }
}

/// Driver that names a pillar outside the vehicle registry.
#[derive(Debug)]
pub struct MisconfiguredDriver {
    relevant: Vec<Pillar>,
}

impl Default for MisconfiguredDriver {
    fn default() -> Self {
        Self {
            relevant: vec![Pillar::new("odometer_rollback")],
        }
    }
}

impl EvidenceDriver for MisconfiguredDriver {
    fn target_p(&self, _t: f64) -> f64 {
        0.5
    }

    fn target_s(&self, _t: f64) -> f64 {
        0.5
    }

    fn relevant_pillars(&self) -> &[Pillar] {
        &self.relevant
    }
}
