use super::error_code::{self, VigilErrorCode};

/// Pillar registry errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("pillar registry must contain at least one pillar")]
    Empty,

    #[error("duplicate pillar in registry: {name}")]
    DuplicatePillar { name: String },

    #[error("unknown pillar: {name}")]
    UnknownPillar { name: String },
}

impl VigilErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        error_code::REGISTRY_ERROR
    }
}
