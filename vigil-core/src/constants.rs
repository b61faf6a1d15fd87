/// Vigil engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Seconds in one day, used for all day-based age arithmetic.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Maximum decimal precision accepted for stored scores.
pub const MAX_SCORE_PRECISION: u32 = 9;

/// Longest estimation window or never-observed lookback, in days.
pub const MAX_LOOKBACK_DAYS: u32 = 36_500;

/// Source labels attached to generated observations.
pub const DEFAULT_EVIDENCE_SOURCES: [&str; 8] = [
    "OBD-II",
    "Dealer Report",
    "Telematics",
    "Warranty Claim",
    "Field Report",
    "Inspection",
    "TSB Match",
    "Customer Report",
];
