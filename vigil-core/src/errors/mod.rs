//! Error handling for Vigil.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod evidence_error;
pub mod registry_error;
pub mod timeline_error;
pub mod vigil_error;

pub use config_error::ConfigError;
pub use error_code::VigilErrorCode;
pub use evidence_error::EvidenceError;
pub use registry_error::RegistryError;
pub use timeline_error::TimelineError;
pub use vigil_error::{VigilError, VigilResult};
