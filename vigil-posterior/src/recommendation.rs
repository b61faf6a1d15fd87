//! Service recommendation derived from an entity's latest posterior.

use serde::{Deserialize, Serialize};
use vigil_core::models::{EntitySummary, RiskBand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceUrgency {
    None,
    Routine,
    Soon,
    Immediate,
}

impl ServiceUrgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Routine => "routine",
            Self::Soon => "soon",
            Self::Immediate => "immediate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecommendation {
    pub recommended: bool,
    pub urgency: ServiceUrgency,
    pub reason: String,
}

impl ServiceRecommendation {
    /// Map a summary to a recommendation. An active hold always wins.
    pub fn from_summary(summary: &EntitySummary, hold_active: bool) -> Self {
        if hold_active {
            return Self {
                recommended: false,
                urgency: ServiceUrgency::None,
                reason: "Hold active; manual review required".to_string(),
            };
        }
        match summary.risk_band {
            RiskBand::Critical => Self {
                recommended: true,
                urgency: ServiceUrgency::Immediate,
                reason: format!(
                    "Critical P-score ({:.3}); immediate service recommended",
                    summary.p
                ),
            },
            RiskBand::High => Self {
                recommended: true,
                urgency: ServiceUrgency::Soon,
                reason: format!("High P-score ({:.3}); schedule service soon", summary.p),
            },
            RiskBand::Medium => Self {
                recommended: true,
                urgency: ServiceUrgency::Routine,
                reason: "Moderate risk; routine service recommended".to_string(),
            },
            RiskBand::Low => Self {
                recommended: false,
                urgency: ServiceUrgency::None,
                reason: "Low risk; no action needed".to_string(),
            },
        }
    }
}
