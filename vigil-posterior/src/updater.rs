//! Posterior update: smoothed P and S, recomputed C.
//!
//! ```text
//! w        = clamp01(1 − missing · missing_evidence_weight)
//! target_p = base_p · w + prior_p · (1 − w)
//! p        = prev_p + (target_p − prev_p) · p_alpha + ε
//! s        = prev_s + (target_s − prev_s) · s_alpha + ε
//! c        = baseline − missing·wm − staleness·ws − conflict·wc + ε
//!            − max(0, s − extreme_threshold) · extreme_penalty
//! ```
//!
//! Every intermediate is clamped to [0, 1]. The pure helpers below carry
//! the arithmetic; [`PosteriorUpdater`] wires in driver targets and noise.

use tracing::warn;
use vigil_core::config::PosteriorConfig;
use vigil_core::score::{clamp01, sanitize_unit};
use vigil_core::traits::EvidenceDriver;
use vigil_evidence::RngStream;

use crate::frame::Frame;

/// Exponential smoothing step toward `target`.
pub fn smooth_step(prev: f64, target: f64, alpha: f64) -> f64 {
    prev + (target - prev) * alpha
}

/// Regress a driver-derived probability toward the prior in proportion to
/// missing evidence.
pub fn target_p(base_p: f64, missing_penalty: f64, config: &PosteriorConfig) -> f64 {
    let weight = clamp01(1.0 - missing_penalty * config.missing_evidence_weight);
    clamp01(base_p * weight + config.prior_p * (1.0 - weight))
}

/// Severity implied by the frame's evidence alone.
pub fn evidence_severity(present_ratio: f64, conflict: f64, config: &PosteriorConfig) -> f64 {
    clamp01(
        config.evidence_severity_base
            + present_ratio * config.evidence_severity_present
            + conflict * config.evidence_severity_conflict,
    )
}

/// Blend driver and evidence severity, then shift for staleness and
/// missingness.
pub fn target_s(
    base_s: f64,
    evidence_s: f64,
    staleness_penalty: f64,
    missing_penalty: f64,
    config: &PosteriorConfig,
) -> f64 {
    clamp01(
        config.driver_severity_weight * base_s
            + config.evidence_severity_weight * evidence_s
            + staleness_penalty * config.severity_staleness_penalty
            - missing_penalty * config.severity_missing_penalty,
    )
}

/// Confidence for one frame. Strictly decreasing in `missing_penalty`
/// while the baseline term stays inside (0, 1).
pub fn target_confidence(
    missing_penalty: f64,
    staleness_penalty: f64,
    conflict: f64,
    s: f64,
    jitter: f64,
    config: &PosteriorConfig,
) -> f64 {
    let base = clamp01(
        config.confidence_baseline
            - missing_penalty * config.confidence_missing_weight
            - staleness_penalty * config.confidence_staleness_weight
            - conflict * config.confidence_conflict_weight
            + jitter,
    );
    let extreme = (s - config.extreme_severity_threshold).max(0.0);
    clamp01(base - extreme * config.extreme_severity_penalty)
}

/// Carried-forward state between frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosteriorState {
    pub p: f64,
    pub s: f64,
}

/// Unrounded output of one update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PosteriorUpdate {
    pub p: f64,
    pub c: f64,
    pub s: f64,
}

impl PosteriorUpdate {
    pub fn state(&self) -> PosteriorState {
        PosteriorState { p: self.p, s: self.s }
    }
}

pub struct PosteriorUpdater<'a> {
    config: &'a PosteriorConfig,
}

impl<'a> PosteriorUpdater<'a> {
    pub fn new(config: &'a PosteriorConfig) -> Self {
        Self { config }
    }

    /// Starting P and S before frame 0.
    pub fn seed(
        &self,
        entity_id: &str,
        driver: &dyn EvidenceDriver,
        rng: &mut RngStream,
    ) -> PosteriorState {
        let p = driver_target(entity_id, driver, "target_p", 0.0, driver.target_p(0.0));
        let s = driver_target(entity_id, driver, "target_s", 0.0, driver.target_s(0.0));
        PosteriorState {
            p: clamp01(p + rng.jitter(self.config.seed_p_jitter)),
            s: clamp01(s + rng.jitter(self.config.seed_s_jitter)),
        }
    }

    /// Advance from `prev` through one frame at normalized time `t`.
    ///
    /// P is computed first; S reads this frame's P.
    pub fn update(
        &self,
        entity_id: &str,
        driver: &dyn EvidenceDriver,
        t: f64,
        frame: &Frame,
        prev: PosteriorState,
        rng: &mut RngStream,
    ) -> PosteriorUpdate {
        let cfg = self.config;

        let driver_p = driver_target(entity_id, driver, "target_p", t, driver.target_p(t));
        let base_p = clamp01(driver_p + rng.jitter(cfg.target_p_jitter));
        let goal_p = target_p(base_p, frame.missing_penalty, cfg);
        let p = clamp01(smooth_step(prev.p, goal_p, cfg.p_alpha) + rng.jitter(cfg.p_jitter));

        let driver_s = driver_target(entity_id, driver, "target_s", t, driver.target_s(t));
        let base_s =
            clamp01(driver_s + cfg.severity_p_coupling * p + rng.jitter(cfg.target_s_jitter));
        let evidence_s = evidence_severity(frame.present_ratio(), frame.conflict, cfg);
        let goal_s = target_s(
            base_s,
            evidence_s,
            frame.staleness_penalty,
            frame.missing_penalty,
            cfg,
        );
        let s = clamp01(smooth_step(prev.s, goal_s, cfg.s_alpha) + rng.jitter(cfg.s_jitter));

        let c = target_confidence(
            frame.missing_penalty,
            frame.staleness_penalty,
            frame.conflict,
            s,
            rng.jitter(cfg.confidence_jitter),
            cfg,
        );

        PosteriorUpdate { p, c, s }
    }
}

fn driver_target(
    entity_id: &str,
    driver: &dyn EvidenceDriver,
    which: &str,
    t: f64,
    raw: f64,
) -> f64 {
    let sanitized = sanitize_unit(raw);
    if sanitized.adjusted {
        warn!(
            entity_id,
            driver = driver.name(),
            which,
            t,
            raw,
            clamped = sanitized.value,
            "driver target outside [0, 1]; clamped"
        );
    }
    sanitized.value
}
