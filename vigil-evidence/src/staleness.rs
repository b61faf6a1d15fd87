//! Staleness tracking: when each pillar was last seen in a known state.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use vigil_core::models::EvidenceObservation;
use vigil_core::pillar::{Pillar, PillarRegistry};
use vigil_core::window::days_between;

/// Per-entity map of pillar → last non-unknown observation time.
///
/// Entries only move forward. Every registry pillar starts at
/// `never_seen_at`, a time before the estimation window.
#[derive(Debug, Clone, PartialEq)]
pub struct StalenessClock {
    entries: BTreeMap<Pillar, DateTime<Utc>>,
    never_seen_at: DateTime<Utc>,
}

impl StalenessClock {
    pub fn new(registry: &PillarRegistry, never_seen_at: DateTime<Utc>) -> Self {
        Self {
            entries: registry.pillars().map(|p| (p.clone(), never_seen_at)).collect(),
            never_seen_at,
        }
    }

    /// Record an observation. Unknown states carry no information and are
    /// ignored. Returns whether the entry moved.
    pub fn observe(&mut self, observation: &EvidenceObservation) -> bool {
        if !observation.state.is_known() {
            return false;
        }
        self.advance(&observation.pillar, observation.occurred_at)
    }

    /// Move a pillar's entry to `at` if that is later. Returns whether it moved.
    pub fn advance(&mut self, pillar: &Pillar, at: DateTime<Utc>) -> bool {
        match self.entries.get_mut(pillar) {
            Some(last) if at > *last => {
                *last = at;
                true
            }
            _ => false,
        }
    }

    pub fn last_seen(&self, pillar: &Pillar) -> Option<DateTime<Utc>> {
        self.entries.get(pillar).copied()
    }

    /// Whether a pillar has been observed at all.
    pub fn has_seen(&self, pillar: &Pillar) -> bool {
        self.last_seen(pillar)
            .is_some_and(|at| at > self.never_seen_at)
    }

    /// Most recent entry across all pillars.
    pub fn freshest(&self) -> DateTime<Utc> {
        self.entries
            .values()
            .copied()
            .max()
            .unwrap_or(self.never_seen_at)
    }

    /// Days since the freshest entry, never negative.
    pub fn age_days(&self, at: DateTime<Utc>) -> f64 {
        days_between(self.freshest(), at).max(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pillar, DateTime<Utc>)> {
        self.entries.iter().map(|(p, &t)| (p, t))
    }
}

/// Replays a time-ordered observation batch into a clock as checkpoints pass,
/// so the clock never sees evidence from a checkpoint's future.
#[derive(Debug)]
pub struct EvidenceCursor<'a> {
    observations: &'a [EvidenceObservation],
    next: usize,
}

impl<'a> EvidenceCursor<'a> {
    pub fn new(observations: &'a [EvidenceObservation]) -> Self {
        Self {
            observations,
            next: 0,
        }
    }

    /// Feed every remaining observation with `occurred_at <= at` into the
    /// clock. Returns how many observations were consumed.
    pub fn advance_to(&mut self, clock: &mut StalenessClock, at: DateTime<Utc>) -> usize {
        let start = self.next;
        while let Some(obs) = self.observations.get(self.next) {
            if obs.occurred_at > at {
                break;
            }
            clock.observe(obs);
            self.next += 1;
        }
        self.next - start
    }

    pub fn remaining(&self) -> usize {
        self.observations.len() - self.next
    }
}
