//! Labeled vehicle storylines used for seeding, demos and calibration.
//!
//! Each storyline is a target trajectory for P and S over the window plus
//! the pillars its evidence concentrates on.

use std::f64::consts::PI;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use vigil_core::entity::Entity;
use vigil_core::models::RiskBand;
use vigil_core::pillar::Pillar;
use vigil_core::score::clamp01;
use vigil_core::traits::EvidenceDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Storyline {
    GradualDegradation,
    SuddenAlert,
    AbsenceRebound,
    StaleHold,
    MultiPillarConvergence,
    FalseSuppression,
    SlowRecovery,
    IntermittentFlicker,
    NewVehicleBaseline,
    FleetOutlier,
}

impl Storyline {
    pub const ALL: [Storyline; 10] = [
        Self::GradualDegradation,
        Self::SuddenAlert,
        Self::AbsenceRebound,
        Self::StaleHold,
        Self::MultiPillarConvergence,
        Self::FalseSuppression,
        Self::SlowRecovery,
        Self::IntermittentFlicker,
        Self::NewVehicleBaseline,
        Self::FleetOutlier,
    ];

    /// Catalog number, 1-based.
    pub fn id(self) -> u8 {
        self.position() as u8 + 1
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get((id as usize).checked_sub(1)?).copied()
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::GradualDegradation => "Gradual Degradation",
            Self::SuddenAlert => "Sudden Alert",
            Self::AbsenceRebound => "Absence → Rebound",
            Self::StaleHold => "Stale Hold",
            Self::MultiPillarConvergence => "Multi-Pillar Convergence",
            Self::FalseSuppression => "False Suppression",
            Self::SlowRecovery => "Slow Recovery",
            Self::IntermittentFlicker => "Intermittent Flicker",
            Self::NewVehicleBaseline => "New Vehicle Baseline",
            Self::FleetOutlier => "Fleet Outlier",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::GradualDegradation => "Pillars accumulate over 60 days, P rises steadily",
            Self::SuddenAlert => "Single critical pillar event spikes P from 0.2 to 0.85",
            Self::AbsenceRebound => "Missing service record, P dips, then rebounds with evidence",
            Self::StaleHold => "P high but S also high, governance holds action",
            Self::MultiPillarConvergence => "4+ pillars present simultaneously, escalation",
            Self::FalseSuppression => "Suppressed then contradicted by reappearance",
            Self::SlowRecovery => "Was critical, now declining as repairs confirmed",
            Self::IntermittentFlicker => "Pillar appears/disappears creating uncertainty",
            Self::NewVehicleBaseline => "Recent purchase, minimal history, low P",
            Self::FleetOutlier => "Statistically unusual vs fleet peers",
        }
    }

    /// Pillar names the storyline's evidence concentrates on.
    pub fn pattern(self) -> &'static [&'static str] {
        match self {
            Self::GradualDegradation => {
                &["dtc_history", "service_history", "telematics", "warranty_claims"]
            }
            Self::SuddenAlert => &["recall_status", "field_reports"],
            Self::AbsenceRebound => &[
                "service_history",
                "dtc_history",
                "telematics",
                "inspection_results",
                "warranty_claims",
            ],
            Self::StaleHold => &["dtc_history", "recall_status", "tsb_applicability"],
            Self::MultiPillarConvergence => &[
                "dtc_history",
                "recall_status",
                "service_history",
                "warranty_claims",
                "tsb_applicability",
                "field_reports",
            ],
            Self::FalseSuppression => &["dtc_history", "telematics", "field_reports"],
            Self::SlowRecovery => &["service_history", "inspection_results", "warranty_claims"],
            Self::IntermittentFlicker => &["dtc_history", "telematics"],
            Self::NewVehicleBaseline => &["telematics"],
            Self::FleetOutlier => &["dtc_history", "service_history", "telematics", "field_reports"],
        }
    }

    /// Band the storyline is expected to end in.
    pub fn nominal_band(self) -> RiskBand {
        match self {
            Self::SuddenAlert | Self::StaleHold | Self::MultiPillarConvergence => {
                RiskBand::Critical
            }
            Self::GradualDegradation
            | Self::AbsenceRebound
            | Self::FalseSuppression
            | Self::FleetOutlier => RiskBand::High,
            Self::SlowRecovery | Self::IntermittentFlicker => RiskBand::Medium,
            Self::NewVehicleBaseline => RiskBand::Low,
        }
    }

    /// Storyline assigned to the `index`-th vehicle of a seeded fleet.
    pub fn for_fleet_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Entity driven by this storyline.
    pub fn entity(self, id: impl Into<String>) -> Entity {
        Entity::new(id, Arc::new(self))
    }

    fn p_curve(self, t: f64) -> f64 {
        match self {
            Self::GradualDegradation => t * 0.85,
            Self::SuddenAlert => {
                if t < 0.6 {
                    0.15 + t * 0.1
                } else {
                    0.85 - (t - 0.6) * 0.1
                }
            }
            Self::AbsenceRebound => {
                if t < 0.3 {
                    0.6 - t * 0.8
                } else if t < 0.6 {
                    0.35 + (t - 0.3) * 1.5
                } else {
                    0.8
                }
            }
            Self::StaleHold => 0.7 + t * 0.1,
            Self::MultiPillarConvergence => 0.3 + t * 0.6,
            Self::FalseSuppression => {
                if t < 0.4 {
                    0.6
                } else if t < 0.6 {
                    0.3
                } else {
                    0.75
                }
            }
            Self::SlowRecovery => 0.9 - t * 0.6,
            Self::IntermittentFlicker => 0.4 + (t * PI * 4.0).sin() * 0.2,
            Self::NewVehicleBaseline => 0.05 + t * 0.1,
            Self::FleetOutlier => 0.5 + (t * PI * 2.0).sin() * 0.3,
        }
    }

    fn s_curve(self, t: f64) -> f64 {
        match self {
            Self::GradualDegradation => 0.2 + t * 0.3,
            Self::SuddenAlert => {
                if t < 0.6 {
                    0.2
                } else {
                    0.7
                }
            }
            Self::AbsenceRebound => 0.5 + t * 0.3,
            Self::StaleHold => 0.7 + t * 0.15,
            Self::MultiPillarConvergence => 0.3 + t * 0.4,
            Self::FalseSuppression => 0.4,
            Self::SlowRecovery => 0.7 - t * 0.4,
            Self::IntermittentFlicker => 0.35,
            Self::NewVehicleBaseline => 0.1,
            Self::FleetOutlier => 0.5 + t * 0.2,
        }
    }
}

fn relevant_table() -> &'static [Vec<Pillar>; 10] {
    static TABLE: OnceLock<[Vec<Pillar>; 10]> = OnceLock::new();
    TABLE.get_or_init(|| {
        Storyline::ALL.map(|s| s.pattern().iter().copied().map(Pillar::from).collect())
    })
}

impl EvidenceDriver for Storyline {
    fn target_p(&self, t: f64) -> f64 {
        clamp01(self.p_curve(t))
    }

    fn target_s(&self, t: f64) -> f64 {
        clamp01(self.s_curve(t))
    }

    fn relevant_pillars(&self) -> &[Pillar] {
        &relevant_table()[self.position()]
    }

    fn name(&self) -> &str {
        self.label()
    }
}
