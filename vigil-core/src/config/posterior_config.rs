use serde::{Deserialize, Serialize};

use super::defaults;

/// Posterior update weights.
///
/// The severity blend (`driver_severity_weight` / `evidence_severity_weight`)
/// and the confidence weights are calibration constants, not derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PosteriorConfig {
    // Probability
    /// Uninformed prior P regresses toward under missing evidence.
    pub prior_p: f64,
    /// How strongly missingness shifts weight from the driver to the prior.
    pub missing_evidence_weight: f64,
    /// Exponential smoothing factor for P.
    pub p_alpha: f64,
    pub seed_p_jitter: f64,
    pub target_p_jitter: f64,
    pub p_jitter: f64,

    // Severity
    /// Exponential smoothing factor for S.
    pub s_alpha: f64,
    pub seed_s_jitter: f64,
    pub target_s_jitter: f64,
    pub s_jitter: f64,
    /// Share of the frame's smoothed P folded into driver severity.
    pub severity_p_coupling: f64,
    pub driver_severity_weight: f64,
    pub evidence_severity_weight: f64,
    pub evidence_severity_base: f64,
    pub evidence_severity_present: f64,
    pub evidence_severity_conflict: f64,
    pub severity_staleness_penalty: f64,
    pub severity_missing_penalty: f64,

    // Confidence
    pub confidence_baseline: f64,
    pub confidence_missing_weight: f64,
    pub confidence_staleness_weight: f64,
    pub confidence_conflict_weight: f64,
    pub confidence_jitter: f64,
    /// Severity above which confidence is further reduced.
    pub extreme_severity_threshold: f64,
    pub extreme_severity_penalty: f64,

    /// Decimal places kept for stored P, C, S.
    pub precision: u32,
}

impl Default for PosteriorConfig {
    fn default() -> Self {
        Self {
            prior_p: defaults::DEFAULT_PRIOR_P,
            missing_evidence_weight: defaults::DEFAULT_MISSING_EVIDENCE_WEIGHT,
            p_alpha: defaults::DEFAULT_P_ALPHA,
            seed_p_jitter: defaults::DEFAULT_SEED_P_JITTER,
            target_p_jitter: defaults::DEFAULT_TARGET_P_JITTER,
            p_jitter: defaults::DEFAULT_P_JITTER,
            s_alpha: defaults::DEFAULT_S_ALPHA,
            seed_s_jitter: defaults::DEFAULT_SEED_S_JITTER,
            target_s_jitter: defaults::DEFAULT_TARGET_S_JITTER,
            s_jitter: defaults::DEFAULT_S_JITTER,
            severity_p_coupling: defaults::DEFAULT_SEVERITY_P_COUPLING,
            driver_severity_weight: defaults::DEFAULT_DRIVER_SEVERITY_WEIGHT,
            evidence_severity_weight: defaults::DEFAULT_EVIDENCE_SEVERITY_WEIGHT,
            evidence_severity_base: defaults::DEFAULT_EVIDENCE_SEVERITY_BASE,
            evidence_severity_present: defaults::DEFAULT_EVIDENCE_SEVERITY_PRESENT,
            evidence_severity_conflict: defaults::DEFAULT_EVIDENCE_SEVERITY_CONFLICT,
            severity_staleness_penalty: defaults::DEFAULT_SEVERITY_STALENESS_PENALTY,
            severity_missing_penalty: defaults::DEFAULT_SEVERITY_MISSING_PENALTY,
            confidence_baseline: defaults::DEFAULT_CONFIDENCE_BASELINE,
            confidence_missing_weight: defaults::DEFAULT_CONFIDENCE_MISSING_WEIGHT,
            confidence_staleness_weight: defaults::DEFAULT_CONFIDENCE_STALENESS_WEIGHT,
            confidence_conflict_weight: defaults::DEFAULT_CONFIDENCE_CONFLICT_WEIGHT,
            confidence_jitter: defaults::DEFAULT_CONFIDENCE_JITTER,
            extreme_severity_threshold: defaults::DEFAULT_EXTREME_SEVERITY_THRESHOLD,
            extreme_severity_penalty: defaults::DEFAULT_EXTREME_SEVERITY_PENALTY,
            precision: defaults::DEFAULT_SCORE_PRECISION,
        }
    }
}

impl PosteriorConfig {
    /// Zero every jitter term. Used for calibration runs and backtests that
    /// need the noise-free trajectory.
    pub fn without_jitter(mut self) -> Self {
        self.seed_p_jitter = 0.0;
        self.target_p_jitter = 0.0;
        self.p_jitter = 0.0;
        self.seed_s_jitter = 0.0;
        self.target_s_jitter = 0.0;
        self.s_jitter = 0.0;
        self.confidence_jitter = 0.0;
        self
    }
}
