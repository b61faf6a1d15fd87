//! Unit-interval arithmetic shared by every scoring step.
//!
//! Every P, C, S, coverage, and penalty value in the engine passes through
//! [`clamp01`] before it is stored or fed forward.

/// Clamp a value to [0.0, 1.0].
///
/// `f64::clamp` propagates NaN, which would poison a whole timeline, so NaN
/// maps to 0.0 here. Infinities saturate to the nearest bound.
pub fn clamp01(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Round to `precision` decimal places (half away from zero).
pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// Clamp then round: the form in which scores are stored.
pub fn unit_score(value: f64, precision: u32) -> f64 {
    clamp01(round_to(clamp01(value), precision))
}

/// Result of sanitizing a value supplied by an external evidence source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sanitized {
    pub value: f64,
    /// True when the raw value was outside [0, 1] or not finite.
    pub adjusted: bool,
}

/// Sanitize a driver-provided target. Out-of-range and non-finite values are
/// a contract violation by the source, never a fatal error.
pub fn sanitize_unit(raw: f64) -> Sanitized {
    let value = clamp01(raw);
    Sanitized {
        value,
        adjusted: !raw.is_finite() || value != raw,
    }
}
