// Single source of truth for all default values.

// --- Window ---
pub const DEFAULT_WINDOW_DAYS: u32 = 90;
pub const DEFAULT_MIN_EVENTS: u32 = 5;
pub const DEFAULT_MAX_EVENTS: u32 = 29;
pub const DEFAULT_MIN_FRAMES: u32 = 8;
pub const DEFAULT_MAX_FRAMES: u32 = 15;
pub const DEFAULT_INITIAL_STALENESS_DAYS: u32 = 21;

// --- Evidence stream ---
pub const DEFAULT_EVENT_TIME_JITTER: f64 = 0.08;
pub const DEFAULT_OFF_PATTERN_PICK_RATE: f64 = 0.2;
pub const DEFAULT_RELEVANT_PRESENT_BIAS: f64 = 0.65;
pub const DEFAULT_BACKGROUND_PRESENT_BIAS: f64 = 0.35;
pub const DEFAULT_ABSENT_BAND: f64 = 0.25;
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.35;
pub const DEFAULT_CONFIDENCE_RANGE: f64 = 0.55;
pub const DEFAULT_CONFIDENCE_NUDGE: f64 = 0.05;
pub const DEFAULT_CONFIDENCE_PRECISION: u32 = 2;

// --- Frame ---
pub const DEFAULT_RELEVANT_ACTIVATION_BASE: f64 = 0.25;
pub const DEFAULT_RELEVANT_ACTIVATION_SLOPE: f64 = 0.6;
pub const DEFAULT_RELEVANT_ACTIVATION_JITTER: f64 = 0.12;
pub const DEFAULT_BACKGROUND_ACTIVATION_BASE: f64 = 0.1;
pub const DEFAULT_BACKGROUND_ACTIVATION_JITTER: f64 = 0.08;
pub const DEFAULT_FLICKER_ABSENT_RATE: f64 = 0.5;
pub const DEFAULT_UNKNOWN_ABSENT_RATE: f64 = 0.15;
pub const DEFAULT_CONFLICT_GAIN: f64 = 1.6;
pub const DEFAULT_STALENESS_HORIZON_DAYS: f64 = 30.0;

// --- Posterior: probability ---
pub const DEFAULT_PRIOR_P: f64 = 0.06;
pub const DEFAULT_MISSING_EVIDENCE_WEIGHT: f64 = 0.35;
pub const DEFAULT_P_ALPHA: f64 = 0.55;
pub const DEFAULT_SEED_P_JITTER: f64 = 0.06;
pub const DEFAULT_TARGET_P_JITTER: f64 = 0.08;
pub const DEFAULT_P_JITTER: f64 = 0.03;

// --- Posterior: severity ---
pub const DEFAULT_S_ALPHA: f64 = 0.5;
pub const DEFAULT_SEED_S_JITTER: f64 = 0.05;
pub const DEFAULT_TARGET_S_JITTER: f64 = 0.06;
pub const DEFAULT_S_JITTER: f64 = 0.03;
pub const DEFAULT_SEVERITY_P_COUPLING: f64 = 0.35;
pub const DEFAULT_DRIVER_SEVERITY_WEIGHT: f64 = 0.55;
pub const DEFAULT_EVIDENCE_SEVERITY_WEIGHT: f64 = 0.45;
pub const DEFAULT_EVIDENCE_SEVERITY_BASE: f64 = 0.15;
pub const DEFAULT_EVIDENCE_SEVERITY_PRESENT: f64 = 0.55;
pub const DEFAULT_EVIDENCE_SEVERITY_CONFLICT: f64 = 0.15;
pub const DEFAULT_SEVERITY_STALENESS_PENALTY: f64 = 0.12;
pub const DEFAULT_SEVERITY_MISSING_PENALTY: f64 = 0.08;

// --- Posterior: confidence ---
pub const DEFAULT_CONFIDENCE_BASELINE: f64 = 0.85;
pub const DEFAULT_CONFIDENCE_MISSING_WEIGHT: f64 = 0.75;
pub const DEFAULT_CONFIDENCE_STALENESS_WEIGHT: f64 = 0.55;
pub const DEFAULT_CONFIDENCE_CONFLICT_WEIGHT: f64 = 0.25;
pub const DEFAULT_CONFIDENCE_JITTER: f64 = 0.05;
pub const DEFAULT_EXTREME_SEVERITY_THRESHOLD: f64 = 0.8;
pub const DEFAULT_EXTREME_SEVERITY_PENALTY: f64 = 0.08;

// --- Storage precision ---
pub const DEFAULT_SCORE_PRECISION: u32 = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_JSON: bool = false;
