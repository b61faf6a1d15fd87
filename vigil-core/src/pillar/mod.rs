//! Pillars: the named evidence categories every other component speaks in.

mod registry;

pub use registry::{CoverageProfile, PillarRegistry, PillarSpec};

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named evidence category. Identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pillar(String);

impl Pillar {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Pillar {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for Pillar {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// State of a pillar in one observation or one sampled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PillarState {
    Present,
    Absent,
    #[default]
    Unknown,
}

impl PillarState {
    /// Whether this state carries information (present or absent).
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for PillarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
