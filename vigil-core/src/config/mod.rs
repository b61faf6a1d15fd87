//! Configuration system for Vigil.
//! TOML-based, resolved as: env (`VIGIL_*`) > file > compiled defaults.

pub mod defaults;
pub mod evidence_config;
pub mod frame_config;
pub mod observability_config;
pub mod posterior_config;
pub mod vigil_config;
pub mod window_config;

pub use evidence_config::EvidenceConfig;
pub use frame_config::FrameConfig;
pub use observability_config::ObservabilityConfig;
pub use posterior_config::PosteriorConfig;
pub use vigil_config::VigilConfig;
pub use window_config::WindowConfig;
