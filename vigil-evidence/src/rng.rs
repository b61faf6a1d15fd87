//! Deterministic per-entity randomness.
//!
//! Each entity owns an [`EntityRng`] keyed by a hash of its id. Every
//! concern (plan, evidence, each frame) draws from its own ChaCha20 stream,
//! so a frame's draws do not depend on how many draws earlier stages made.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use vigil_core::ids::entity_seed;

/// Independent random stream selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamKind {
    /// Event count, frame count, coverage draws.
    Plan,
    /// Evidence stream generation.
    Evidence,
    /// One timeline checkpoint.
    Frame(u32),
}

impl StreamKind {
    fn stream_id(self) -> u64 {
        match self {
            Self::Plan => 0,
            Self::Evidence => 1,
            Self::Frame(index) => 2 + index as u64,
        }
    }
}

/// Seed holder for one entity. Never shared across entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRng {
    seed: u64,
}

impl EntityRng {
    pub fn for_entity(entity_id: &str) -> Self {
        Self {
            seed: entity_seed(entity_id),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fresh stream for `kind`, positioned at its start.
    pub fn stream(&self, kind: StreamKind) -> RngStream {
        let mut rng = ChaCha20Rng::seed_from_u64(self.seed);
        rng.set_stream(kind.stream_id());
        RngStream { rng }
    }
}

/// A positioned random stream with the draw shapes the engine uses.
#[derive(Debug, Clone)]
pub struct RngStream {
    rng: ChaCha20Rng,
}

impl RngStream {
    /// Uniform in [0, 1).
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Symmetric noise in [-magnitude, magnitude). Always consumes one draw.
    pub fn jitter(&mut self, magnitude: f64) -> f64 {
        (self.uniform() * 2.0 - 1.0) * magnitude
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        ((self.uniform() * len as f64) as usize).min(len.saturating_sub(1))
    }

    /// Uniform integer in `lo..=hi`.
    pub fn between(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.index((hi - lo + 1) as usize) as u32
    }
}
