use crate::pillar::Pillar;

/// The evidence source behind an entity: the "true" trajectory that noisy
/// evidence approximates, plus the pillars it expects to light up.
///
/// Labeled scenarios, backtest fixtures and production ingestion all
/// implement this; the engine never invents a trajectory itself.
///
/// Targets are expected in [0, 1] for `t` in [0, 1]. The engine clamps
/// anything else (including NaN) and logs the violation.
pub trait EvidenceDriver: Send + Sync {
    /// Target probability at normalized time `t`.
    fn target_p(&self, t: f64) -> f64;

    /// Target severity at normalized time `t`.
    fn target_s(&self, t: f64) -> f64;

    /// Pillars this driver considers relevant (biases evidence toward them).
    fn relevant_pillars(&self) -> &[Pillar];

    fn is_relevant(&self, pillar: &Pillar) -> bool {
        self.relevant_pillars().contains(pillar)
    }

    /// Short label for logs.
    fn name(&self) -> &str {
        "driver"
    }
}

/// Constant targets. Used for backtests against a known trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedDriver {
    pub p: f64,
    pub s: f64,
    pub relevant: Vec<Pillar>,
}

impl FixedDriver {
    pub fn new(p: f64, s: f64) -> Self {
        Self {
            p,
            s,
            relevant: Vec::new(),
        }
    }

    pub fn with_relevant<I, P>(mut self, pillars: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pillar>,
    {
        self.relevant = pillars.into_iter().map(Into::into).collect();
        self
    }
}

impl EvidenceDriver for FixedDriver {
    fn target_p(&self, _t: f64) -> f64 {
        self.p
    }

    fn target_s(&self, _t: f64) -> f64 {
        self.s
    }

    fn relevant_pillars(&self) -> &[Pillar] {
        &self.relevant
    }

    fn name(&self) -> &str {
        "fixed"
    }
}
