//! Estimation window: maps normalized time t ∈ [0, 1] onto wall-clock time.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::config::WindowConfig;
use crate::constants::SECONDS_PER_DAY;
use crate::errors::ConfigError;
use crate::score::clamp01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimationWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EstimationWindow {
    /// Window of `config.window_days` ending at `end`.
    ///
    /// Fails when the window or the never-observed lookback before it would
    /// fall outside the representable time range.
    pub fn ending_at(end: DateTime<Utc>, config: &WindowConfig) -> Result<Self, ConfigError> {
        let start = end
            .checked_sub_signed(Duration::days(i64::from(config.window_days)))
            .ok_or_else(|| out_of_range("window.window_days", end))?;
        let window = Self { start, end };
        window
            .lookback(config.initial_staleness_days)
            .ok_or_else(|| out_of_range("window.initial_staleness_days", end))?;
        Ok(window)
    }

    /// Instant `days` before the window start, if representable.
    pub fn lookback(&self, days: u32) -> Option<DateTime<Utc>> {
        self.start.checked_sub_signed(Duration::days(i64::from(days)))
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn days(&self) -> f64 {
        self.duration().num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
    }

    /// Wall-clock time at fraction `t` (clamped to the window).
    pub fn at(&self, t: f64) -> DateTime<Utc> {
        let ms = self.duration().num_milliseconds() as f64 * clamp01(t);
        self.start + Duration::milliseconds(ms.round() as i64)
    }

    /// Normalized time fraction of `at`, clamped to [0, 1].
    pub fn fraction(&self, at: DateTime<Utc>) -> f64 {
        let total = self.duration().num_milliseconds() as f64;
        if total <= 0.0 {
            return 1.0;
        }
        clamp01((at - self.start).num_milliseconds() as f64 / total)
    }
}

fn out_of_range(field: &str, end: DateTime<Utc>) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: format!("reaches before the earliest representable time from {end}"),
    }
}

/// Days elapsed from `earlier` to `later` (negative if reversed).
pub fn days_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> f64 {
    (later - earlier).num_milliseconds() as f64 / 1000.0 / SECONDS_PER_DAY
}
