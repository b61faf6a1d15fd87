use super::error_code::{self, VigilErrorCode};

/// Errors resuming or extending a snapshot sequence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    #[error("invalid snapshot history for {entity_id}: {reason}")]
    InvalidHistory { entity_id: String, reason: String },
}

impl VigilErrorCode for TimelineError {
    fn error_code(&self) -> &'static str {
        error_code::TIMELINE_ERROR
    }
}
