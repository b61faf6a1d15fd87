//! Engine entry points: single-entity assessment, resume, and parallel batch.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{info, warn};
use vigil_core::config::VigilConfig;
use vigil_core::entity::Entity;
use vigil_core::errors::{VigilError, VigilResult};
use vigil_core::models::{EntityAssessment, EvidenceObservation, PosteriorSnapshot};
use vigil_core::pillar::PillarRegistry;
use vigil_core::window::EstimationWindow;
use vigil_core::{assess_span, batch_span, resume_span};

use crate::timeline::TimelineRunner;

/// One entity that could not be scored.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityFailure {
    pub entity_id: String,
    pub error: VigilError,
}

/// Outcome of [`PosteriorEngine::assess_batch`]. Both lists keep input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub assessments: Vec<EntityAssessment>,
    pub failures: Vec<EntityFailure>,
}

impl BatchReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Entities attempted.
    pub fn total(&self) -> usize {
        self.assessments.len() + self.failures.len()
    }
}

/// Posterior scoring engine for a fixed registry, config and window.
///
/// Shared read-only across worker threads; every entity's computation owns
/// its own random streams and clock.
pub struct PosteriorEngine {
    registry: PillarRegistry,
    config: VigilConfig,
    window: EstimationWindow,
}

impl PosteriorEngine {
    /// Validate `config` and fix the window to end at `window_end`.
    pub fn new(
        registry: PillarRegistry,
        config: VigilConfig,
        window_end: DateTime<Utc>,
    ) -> VigilResult<Self> {
        config.validate()?;
        let window = EstimationWindow::ending_at(window_end, &config.window)?;
        Ok(Self {
            registry,
            config,
            window,
        })
    }

    pub fn registry(&self) -> &PillarRegistry {
        &self.registry
    }

    pub fn config(&self) -> &VigilConfig {
        &self.config
    }

    pub fn window(&self) -> &EstimationWindow {
        &self.window
    }

    fn runner(&self) -> TimelineRunner<'_> {
        TimelineRunner::new(&self.registry, &self.config, self.window)
    }

    /// Score one entity over the whole window.
    pub fn assess(&self, entity: &Entity) -> VigilResult<EntityAssessment> {
        let span = assess_span!(entity.id);
        let _guard = span.enter();

        let assessment = self.runner().run(entity)?;
        info!(
            entity_id = %entity.id,
            driver = entity.driver.name(),
            frames = assessment.snapshots.len(),
            observations = assessment.observations.len(),
            p = assessment.summary.p,
            band = assessment.summary.risk_band.as_str(),
            "entity assessed"
        );
        Ok(assessment)
    }

    /// Continue a stored snapshot sequence for `entity`. See
    /// [`TimelineRunner::resume`].
    pub fn resume(
        &self,
        entity: &Entity,
        observations: &[EvidenceObservation],
        history: Vec<PosteriorSnapshot>,
    ) -> VigilResult<EntityAssessment> {
        let span = resume_span!(entity.id, history.len());
        let _guard = span.enter();

        let stored = history.len();
        let assessment = self.runner().resume(entity, observations, history)?;
        info!(
            entity_id = %entity.id,
            stored,
            appended = assessment.snapshots.len() - stored,
            p = assessment.summary.p,
            band = assessment.summary.risk_band.as_str(),
            "timeline resumed"
        );
        Ok(assessment)
    }

    /// Score every entity on the rayon pool. A failing entity is reported in
    /// `failures` and does not affect the others.
    pub fn assess_batch(&self, entities: &[Entity]) -> BatchReport {
        let span = batch_span!(entities.len());
        let _guard = span.enter();

        let results: Vec<(String, VigilResult<EntityAssessment>)> = entities
            .par_iter()
            .map(|entity| (entity.id.clone(), self.assess(entity)))
            .collect();

        let mut report = BatchReport::default();
        for (entity_id, result) in results {
            match result {
                Ok(assessment) => report.assessments.push(assessment),
                Err(error) => {
                    warn!(entity_id = %entity_id, error = %error, "entity failed");
                    report.failures.push(EntityFailure { entity_id, error });
                }
            }
        }

        info!(
            entities = entities.len(),
            assessed = report.assessments.len(),
            failed = report.failures.len(),
            "batch complete"
        );
        report
    }
}
