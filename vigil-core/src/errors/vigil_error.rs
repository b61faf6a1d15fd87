use super::error_code::VigilErrorCode;
use super::{ConfigError, EvidenceError, RegistryError, TimelineError};

/// Top-level engine error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VigilError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Evidence error: {0}")]
    Evidence(#[from] EvidenceError),

    #[error("Timeline error: {0}")]
    Timeline(#[from] TimelineError),
}

impl VigilErrorCode for VigilError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Registry(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Evidence(e) => e.error_code(),
            Self::Timeline(e) => e.error_code(),
        }
    }
}

pub type VigilResult<T> = Result<T, VigilError>;
