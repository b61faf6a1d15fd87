//! # vigil-core
//!
//! Foundation crate for the Vigil posterior risk engine.
//! Defines the pillar vocabulary, data model, driver capability, errors,
//! config, and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod entity;
pub mod errors;
pub mod ids;
pub mod models;
pub mod pillar;
pub mod score;
pub mod tracing_setup;
pub mod traits;
pub mod window;

// Re-export the most commonly used types at the crate root.
pub use config::VigilConfig;
pub use entity::Entity;
pub use errors::{VigilError, VigilResult};
pub use models::{
    EntityAssessment, EntitySummary, EvidenceObservation, PillarVector, PosteriorSnapshot,
    RiskBand,
};
pub use pillar::{Pillar, PillarRegistry, PillarSpec, PillarState};
pub use traits::EvidenceDriver;
pub use window::EstimationWindow;
