//! # vigil-posterior
//!
//! Turns an entity's evidence into a sequence of smoothed posterior
//! snapshots: per-checkpoint frame evaluation, the P/C/S update, the
//! per-entity timeline, and parallel batch scoring.

pub mod engine;
pub mod frame;
pub mod recommendation;
pub mod scenarios;
pub mod timeline;
pub mod updater;

pub use engine::{BatchReport, EntityFailure, PosteriorEngine};
pub use frame::{Frame, FrameEvaluator};
pub use recommendation::{ServiceRecommendation, ServiceUrgency};
pub use scenarios::Storyline;
pub use timeline::TimelineRunner;
pub use updater::{PosteriorState, PosteriorUpdate, PosteriorUpdater};
