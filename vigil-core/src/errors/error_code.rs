//! Stable, machine-readable error codes for consumers of engine failures.

pub const REGISTRY_ERROR: &str = "REGISTRY_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EVIDENCE_ERROR: &str = "EVIDENCE_ERROR";
pub const TIMELINE_ERROR: &str = "TIMELINE_ERROR";

/// Maps an error to a stable code string.
pub trait VigilErrorCode {
    fn error_code(&self) -> &'static str;
}
