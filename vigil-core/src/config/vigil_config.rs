//! Top-level Vigil configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EvidenceConfig, FrameConfig, ObservabilityConfig, PosteriorConfig, WindowConfig};
use crate::constants::{MAX_LOOKBACK_DAYS, MAX_SCORE_PRECISION};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VIGIL_*`)
/// 2. Config file passed to [`VigilConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VigilConfig {
    pub window: WindowConfig,
    pub evidence: EvidenceConfig,
    pub frame: FrameConfig,
    pub posterior: PosteriorConfig,
    pub observability: ObservabilityConfig,
}

impl VigilConfig {
    /// Load a config file, apply `VIGIL_*` overrides, and validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let mut config: VigilConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Missing keys keep defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: VigilConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if w.window_days == 0 {
            return Err(invalid("window.window_days", "must be greater than 0"));
        }
        at_most("window.window_days", w.window_days, MAX_LOOKBACK_DAYS)?;
        at_most(
            "window.initial_staleness_days",
            w.initial_staleness_days,
            MAX_LOOKBACK_DAYS,
        )?;
        if w.min_events > w.max_events {
            return Err(invalid("window.min_events", "must not exceed window.max_events"));
        }
        if w.min_frames == 0 {
            return Err(invalid("window.min_frames", "must be at least 1"));
        }
        if w.min_frames > w.max_frames {
            return Err(invalid("window.min_frames", "must not exceed window.max_frames"));
        }

        let e = &self.evidence;
        unit("evidence.event_time_jitter", e.event_time_jitter)?;
        unit("evidence.off_pattern_pick_rate", e.off_pattern_pick_rate)?;
        unit("evidence.relevant_present_bias", e.relevant_present_bias)?;
        unit("evidence.background_present_bias", e.background_present_bias)?;
        unit("evidence.absent_band", e.absent_band)?;
        unit("evidence.confidence_floor", e.confidence_floor)?;
        unit("evidence.confidence_range", e.confidence_range)?;
        unit("evidence.confidence_nudge", e.confidence_nudge)?;
        at_most(
            "evidence.confidence_precision",
            e.confidence_precision,
            MAX_SCORE_PRECISION,
        )?;
        if e.sources.is_empty() {
            return Err(invalid("evidence.sources", "must list at least one source"));
        }

        let f = &self.frame;
        unit("frame.relevant_activation_base", f.relevant_activation_base)?;
        unit("frame.relevant_activation_slope", f.relevant_activation_slope)?;
        unit("frame.relevant_activation_jitter", f.relevant_activation_jitter)?;
        unit("frame.background_activation_base", f.background_activation_base)?;
        unit("frame.background_activation_jitter", f.background_activation_jitter)?;
        unit("frame.flicker_absent_rate", f.flicker_absent_rate)?;
        unit("frame.unknown_absent_rate", f.unknown_absent_rate)?;
        if !(f.conflict_gain.is_finite() && f.conflict_gain >= 0.0) {
            return Err(invalid("frame.conflict_gain", "must be a non-negative number"));
        }
        if !(f.staleness_horizon_days.is_finite() && f.staleness_horizon_days > 0.0) {
            return Err(invalid("frame.staleness_horizon_days", "must be greater than 0"));
        }

        let p = &self.posterior;
        unit("posterior.prior_p", p.prior_p)?;
        unit("posterior.missing_evidence_weight", p.missing_evidence_weight)?;
        alpha("posterior.p_alpha", p.p_alpha)?;
        alpha("posterior.s_alpha", p.s_alpha)?;
        for (field, value) in [
            ("posterior.seed_p_jitter", p.seed_p_jitter),
            ("posterior.target_p_jitter", p.target_p_jitter),
            ("posterior.p_jitter", p.p_jitter),
            ("posterior.seed_s_jitter", p.seed_s_jitter),
            ("posterior.target_s_jitter", p.target_s_jitter),
            ("posterior.s_jitter", p.s_jitter),
            ("posterior.severity_p_coupling", p.severity_p_coupling),
            ("posterior.driver_severity_weight", p.driver_severity_weight),
            ("posterior.evidence_severity_weight", p.evidence_severity_weight),
            ("posterior.evidence_severity_base", p.evidence_severity_base),
            ("posterior.evidence_severity_present", p.evidence_severity_present),
            ("posterior.evidence_severity_conflict", p.evidence_severity_conflict),
            ("posterior.severity_staleness_penalty", p.severity_staleness_penalty),
            ("posterior.severity_missing_penalty", p.severity_missing_penalty),
            ("posterior.confidence_baseline", p.confidence_baseline),
            ("posterior.confidence_missing_weight", p.confidence_missing_weight),
            ("posterior.confidence_staleness_weight", p.confidence_staleness_weight),
            ("posterior.confidence_conflict_weight", p.confidence_conflict_weight),
            ("posterior.confidence_jitter", p.confidence_jitter),
            ("posterior.extreme_severity_threshold", p.extreme_severity_threshold),
            ("posterior.extreme_severity_penalty", p.extreme_severity_penalty),
        ] {
            unit(field, value)?;
        }
        at_most("posterior.precision", p.precision, MAX_SCORE_PRECISION)?;
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `VIGIL_WINDOW_DAYS`, `VIGIL_PRIOR_P`, `VIGIL_LOG_LEVEL`, etc.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("VIGIL_WINDOW_DAYS") {
            if let Ok(v) = val.parse::<u32>() {
                self.window.window_days = v;
            }
        }
        if let Ok(val) = std::env::var("VIGIL_PRIOR_P") {
            if let Ok(v) = val.parse::<f64>() {
                self.posterior.prior_p = v;
            }
        }
        if let Ok(val) = std::env::var("VIGIL_SCORE_PRECISION") {
            if let Ok(v) = val.parse::<u32>() {
                self.posterior.precision = v;
            }
        }
        if let Ok(val) = std::env::var("VIGIL_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("VIGIL_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json = v;
            }
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn unit(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, "must be between 0.0 and 1.0"))
    }
}

fn at_most(field: &str, value: u32, max: u32) -> Result<(), ConfigError> {
    if value <= max {
        Ok(())
    } else {
        Err(invalid(field, &format!("must be at most {max}")))
    }
}

fn alpha(field: &str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be in (0.0, 1.0]"))
    }
}
