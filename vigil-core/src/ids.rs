//! Stable identifiers.
//!
//! Observation and snapshot ids are derived from the entity id and the
//! record's position, so two runs for the same entity produce identical ids.

use uuid::{Builder, Uuid};

/// Derive a UUID (v4 layout) from a blake3 hash of `(entity_id, kind, index)`.
pub fn stable_id(entity_id: &str, kind: &str, index: u64) -> Uuid {
    let mut hasher = blake3::Hasher::new();
    hasher.update(entity_id.as_bytes());
    hasher.update(&[0]);
    hasher.update(kind.as_bytes());
    hasher.update(&index.to_le_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&digest.as_bytes()[..16]);
    Builder::from_random_bytes(bytes).into_uuid()
}

/// 64-bit seed derived from an entity id.
pub fn entity_seed(entity_id: &str) -> u64 {
    let digest = blake3::hash(entity_id.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
