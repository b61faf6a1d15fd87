//! Frame evaluation: one checkpoint's pillar vector and its aggregates.

use chrono::{DateTime, Utc};
use vigil_core::config::FrameConfig;
use vigil_core::models::PillarVector;
use vigil_core::pillar::{PillarRegistry, PillarState};
use vigil_core::score::clamp01;
use vigil_core::traits::EvidenceDriver;
use vigil_evidence::{CoverageModel, RngStream, StalenessClock};

/// One evaluated checkpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Exactly one entry per registry pillar.
    pub vector: PillarVector,
    /// Pillars included (sampled) in this frame, regardless of state.
    pub observed_count: usize,
    pub present_count: usize,
    pub absent_count: usize,
    /// Registry size.
    pub total: usize,
    pub missing_penalty: f64,
    pub staleness_penalty: f64,
    pub conflict: f64,
}

impl Frame {
    /// Share of all registry pillars that read `present`.
    pub fn present_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.present_count as f64 / self.total as f64
    }
}

/// Penalty for evidence age: 0 when fresh, 1 at `horizon_days` and beyond.
pub fn staleness_penalty(age_days: f64, horizon_days: f64) -> f64 {
    if horizon_days <= 0.0 {
        return 1.0;
    }
    clamp01(age_days / horizon_days)
}

/// Share of registry pillars missing from the frame.
pub fn missing_penalty(observed: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    clamp01(1.0 - observed as f64 / total as f64)
}

/// Disagreement proxy: `min(1, absent / max(1, observed) * gain)`.
/// A frame with nothing observed has no conflict.
pub fn conflict_score(absent: usize, observed: usize, gain: f64) -> f64 {
    if observed == 0 {
        return 0.0;
    }
    clamp01(absent as f64 / observed.max(1) as f64 * gain)
}

pub struct FrameEvaluator<'a> {
    registry: &'a PillarRegistry,
    config: &'a FrameConfig,
}

impl<'a> FrameEvaluator<'a> {
    pub fn new(registry: &'a PillarRegistry, config: &'a FrameConfig) -> Self {
        Self { registry, config }
    }

    /// Sample every pillar at normalized time `t` (wall-clock `at`).
    ///
    /// Non-unknown reads advance `clock` to `at`; the staleness penalty is
    /// taken against the clock after those updates.
    pub fn evaluate(
        &self,
        driver: &dyn EvidenceDriver,
        t: f64,
        at: DateTime<Utc>,
        coverage: &CoverageModel,
        clock: &mut StalenessClock,
        rng: &mut RngStream,
    ) -> Frame {
        let mut vector = PillarVector::new();
        let mut observed = 0;
        let mut present = 0;
        let mut absent = 0;

        for spec in self.registry.specs() {
            if !rng.chance(coverage.coverage(&spec.pillar)) {
                vector.insert(spec.pillar.clone(), PillarState::Unknown);
                continue;
            }
            observed += 1;

            let activation = if driver.is_relevant(&spec.pillar) {
                clamp01(
                    self.config.relevant_activation_base
                        + self.config.relevant_activation_slope * t
                        + rng.jitter(self.config.relevant_activation_jitter),
                )
            } else {
                clamp01(
                    self.config.background_activation_base
                        + rng.jitter(self.config.background_activation_jitter),
                )
            };

            let state = self.sample_state(activation, spec.flip_rate, rng);
            match state {
                PillarState::Present => present += 1,
                PillarState::Absent => absent += 1,
                PillarState::Unknown => {}
            }
            if state.is_known() {
                clock.advance(&spec.pillar, at);
            }
            vector.insert(spec.pillar.clone(), state);
        }

        let total = self.registry.len();
        Frame {
            vector,
            observed_count: observed,
            present_count: present,
            absent_count: absent,
            total,
            missing_penalty: missing_penalty(observed, total),
            staleness_penalty: staleness_penalty(
                clock.age_days(at),
                self.config.staleness_horizon_days,
            ),
            conflict: conflict_score(absent, observed, self.config.conflict_gain),
        }
    }

    fn sample_state(&self, activation: f64, flip_rate: f64, rng: &mut RngStream) -> PillarState {
        let flicker = rng.chance(flip_rate);
        if flicker && rng.chance(self.config.flicker_absent_rate) {
            return PillarState::Absent;
        }
        if rng.chance(activation) {
            PillarState::Present
        } else if rng.chance(self.config.unknown_absent_rate) {
            PillarState::Absent
        } else {
            PillarState::Unknown
        }
    }
}
