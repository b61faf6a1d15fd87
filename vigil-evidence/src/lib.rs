//! # vigil-evidence
//!
//! Everything upstream of the posterior: the entity's private random
//! streams, which pillars it is likely to be observed on, the evidence it
//! produces over the window, and when each pillar was last seen.

pub mod coverage;
pub mod ingest;
pub mod rng;
pub mod staleness;
pub mod stream;

pub use coverage::CoverageModel;
pub use ingest::validate_batch;
pub use rng::{EntityRng, RngStream, StreamKind};
pub use staleness::{EvidenceCursor, StalenessClock};
pub use stream::EvidenceStreamGenerator;
