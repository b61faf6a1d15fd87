use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordinal risk classification derived purely from P.
///
/// Lower bounds are inclusive: critical ≥ 0.8, high ≥ 0.6, medium ≥ 0.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskBand {
    pub const CRITICAL_MIN: f64 = 0.8;
    pub const HIGH_MIN: f64 = 0.6;
    pub const MEDIUM_MIN: f64 = 0.3;

    /// Classify a probability. NaN classifies as `Low`.
    pub fn classify(p: f64) -> Self {
        if p >= Self::CRITICAL_MIN {
            Self::Critical
        } else if p >= Self::HIGH_MIN {
            Self::High
        } else if p >= Self::MEDIUM_MIN {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Bands from most to least severe.
    pub const ORDER: [RiskBand; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
