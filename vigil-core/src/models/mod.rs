//! Plain data records produced by the engine and read by consumers.

pub mod assessment;
pub mod observation;
pub mod risk_band;
pub mod snapshot;

pub use assessment::{EntityAssessment, EntitySummary};
pub use observation::EvidenceObservation;
pub use risk_band::RiskBand;
pub use snapshot::{PillarVector, PosteriorSnapshot};
