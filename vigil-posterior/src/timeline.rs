//! Per-entity timeline: plan, evidence, then frames in order.

use chrono::{DateTime, Utc};
use tracing::debug;
use vigil_core::config::VigilConfig;
use vigil_core::entity::Entity;
use vigil_core::errors::{ConfigError, TimelineError, VigilResult};
use vigil_core::ids::stable_id;
use vigil_core::models::{
    EntityAssessment, EntitySummary, EvidenceObservation, PillarVector, PosteriorSnapshot,
    RiskBand,
};
use vigil_core::pillar::PillarRegistry;
use vigil_core::score::unit_score;
use vigil_core::window::EstimationWindow;
use vigil_evidence::{
    validate_batch, CoverageModel, EntityRng, EvidenceCursor, EvidenceStreamGenerator,
    StalenessClock, StreamKind,
};

use crate::frame::FrameEvaluator;
use crate::updater::{PosteriorState, PosteriorUpdate, PosteriorUpdater};

/// Everything drawn once per entity before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePlan {
    pub event_count: u32,
    pub frame_count: u32,
    pub coverage: CoverageModel,
    pub seed: PosteriorState,
}

/// Normalized time of frame `index` out of `frame_count`.
pub fn frame_time(index: u32, frame_count: u32) -> f64 {
    if frame_count <= 1 {
        return 1.0;
    }
    index as f64 / (frame_count - 1) as f64
}

/// Runs one entity's timeline. Holds no per-entity state, so one runner can
/// serve many entities concurrently.
pub struct TimelineRunner<'a> {
    registry: &'a PillarRegistry,
    config: &'a VigilConfig,
    window: EstimationWindow,
}

impl<'a> TimelineRunner<'a> {
    pub fn new(
        registry: &'a PillarRegistry,
        config: &'a VigilConfig,
        window: EstimationWindow,
    ) -> Self {
        Self {
            registry,
            config,
            window,
        }
    }

    pub fn window(&self) -> &EstimationWindow {
        &self.window
    }

    /// Draw event count, frame count, coverage and seed values from the
    /// entity's plan stream.
    pub fn plan(&self, entity: &Entity) -> VigilResult<TimelinePlan> {
        for pillar in entity.driver.relevant_pillars() {
            self.registry.require(pillar)?;
        }

        let mut rng = EntityRng::for_entity(&entity.id).stream(StreamKind::Plan);
        let window = &self.config.window;
        let event_count = rng.between(window.min_events, window.max_events);
        let frame_count = rng.between(window.min_frames, window.max_frames);
        let coverage = CoverageModel::draw(self.registry, &mut rng)
            .apply_overrides(&entity.coverage_overrides)?;
        let seed = PosteriorUpdater::new(&self.config.posterior).seed(
            &entity.id,
            entity.driver.as_ref(),
            &mut rng,
        );

        Ok(TimelinePlan {
            event_count,
            frame_count,
            coverage,
            seed,
        })
    }

    /// The entity's evidence: its validated batch when it carries one,
    /// otherwise a generated stream.
    pub fn observations(
        &self,
        entity: &Entity,
        plan: &TimelinePlan,
    ) -> VigilResult<Vec<EvidenceObservation>> {
        if let Some(batch) = &entity.observations {
            return Ok(validate_batch(&entity.id, self.registry, batch)?);
        }
        let mut rng = EntityRng::for_entity(&entity.id).stream(StreamKind::Evidence);
        let generator = EvidenceStreamGenerator::new(self.registry, &self.config.evidence);
        Ok(generator.generate(
            entity,
            &self.window,
            &plan.coverage,
            plan.event_count,
            &mut rng,
        ))
    }

    /// Full timeline from frame 0.
    pub fn run(&self, entity: &Entity) -> VigilResult<EntityAssessment> {
        let plan = self.plan(entity)?;
        let observations = self.observations(entity, &plan)?;

        let mut clock = self.new_clock()?;
        let mut cursor = EvidenceCursor::new(&observations);
        let mut snapshots = Vec::with_capacity(plan.frame_count as usize);
        self.extend(
            entity,
            &plan,
            &mut clock,
            &mut cursor,
            plan.seed,
            &mut snapshots,
        );

        let summary = self.summarize(entity, &observations, &snapshots)?;
        Ok(EntityAssessment {
            entity_id: entity.id.clone(),
            observations,
            snapshots,
            summary,
        })
    }

    /// Continue a stored prefix of the entity's snapshot sequence.
    ///
    /// `history` must start at frame 0 and be contiguous. The result holds
    /// the history followed by exactly the frames a full run produces
    /// after it.
    pub fn resume(
        &self,
        entity: &Entity,
        observations: &[EvidenceObservation],
        history: Vec<PosteriorSnapshot>,
    ) -> VigilResult<EntityAssessment> {
        let plan = self.plan(entity)?;
        let observations = validate_batch(&entity.id, self.registry, observations)?;
        self.check_history(entity, &plan, &history)?;

        let mut clock = self.new_clock()?;
        let mut cursor = EvidenceCursor::new(&observations);
        let mut prev = plan.seed;
        if let Some(last) = history.last() {
            cursor.advance_to(&mut clock, last.computed_at);
            prev = PosteriorState {
                p: last.p,
                s: last.s,
            };
        }
        for snapshot in &history {
            for (pillar, state) in &snapshot.pillar_vector {
                if state.is_known() {
                    clock.advance(pillar, snapshot.computed_at);
                }
            }
        }

        let mut snapshots = history;
        self.extend(entity, &plan, &mut clock, &mut cursor, prev, &mut snapshots);

        let summary = self.summarize(entity, &observations, &snapshots)?;
        Ok(EntityAssessment {
            entity_id: entity.id.clone(),
            observations,
            snapshots,
            summary,
        })
    }

    fn new_clock(&self) -> VigilResult<StalenessClock> {
        let days = self.config.window.initial_staleness_days;
        let never_seen_at = self.window.lookback(days).ok_or_else(|| {
            ConfigError::ValidationFailed {
                field: "window.initial_staleness_days".to_string(),
                message: format!("{days} days before {} is not representable", self.window.start),
            }
        })?;
        Ok(StalenessClock::new(self.registry, never_seen_at))
    }

    /// Append frames `snapshots.len()..frame_count`. Each frame reads the
    /// previous frame's stored (rounded) P and S.
    fn extend(
        &self,
        entity: &Entity,
        plan: &TimelinePlan,
        clock: &mut StalenessClock,
        cursor: &mut EvidenceCursor<'_>,
        mut prev: PosteriorState,
        snapshots: &mut Vec<PosteriorSnapshot>,
    ) {
        let rng = EntityRng::for_entity(&entity.id);
        let evaluator = FrameEvaluator::new(self.registry, &self.config.frame);
        let updater = PosteriorUpdater::new(&self.config.posterior);
        let driver = entity.driver.as_ref();

        for index in snapshots.len() as u32..plan.frame_count {
            let t = frame_time(index, plan.frame_count);
            let at = self.window.at(t);
            cursor.advance_to(clock, at);

            let mut stream = rng.stream(StreamKind::Frame(index));
            let frame = evaluator.evaluate(driver, t, at, &plan.coverage, clock, &mut stream);
            let update = updater.update(&entity.id, driver, t, &frame, prev, &mut stream);
            let snapshot = self.snapshot(entity, index, at, update, frame.vector);

            debug!(
                entity_id = %entity.id,
                frame = index,
                p = snapshot.p,
                c = snapshot.c,
                s = snapshot.s,
                band = snapshot.risk_band.as_str(),
                "frame scored"
            );
            prev = PosteriorState {
                p: snapshot.p,
                s: snapshot.s,
            };
            snapshots.push(snapshot);
        }
    }

    fn snapshot(
        &self,
        entity: &Entity,
        index: u32,
        computed_at: DateTime<Utc>,
        update: PosteriorUpdate,
        pillar_vector: PillarVector,
    ) -> PosteriorSnapshot {
        let precision = self.config.posterior.precision;
        let p = unit_score(update.p, precision);
        PosteriorSnapshot {
            id: stable_id(&entity.id, "snapshot", index as u64),
            entity_id: entity.id.clone(),
            frame_index: index,
            computed_at,
            p,
            c: unit_score(update.c, precision),
            s: unit_score(update.s, precision),
            risk_band: RiskBand::classify(p),
            pillar_vector,
        }
    }

    fn check_history(
        &self,
        entity: &Entity,
        plan: &TimelinePlan,
        history: &[PosteriorSnapshot],
    ) -> Result<(), TimelineError> {
        let invalid = |reason: String| TimelineError::InvalidHistory {
            entity_id: entity.id.clone(),
            reason,
        };
        if history.is_empty() {
            return Err(invalid("history is empty".to_string()));
        }
        if history.len() > plan.frame_count as usize {
            return Err(invalid(format!(
                "history has {} frames but the timeline has {}",
                history.len(),
                plan.frame_count
            )));
        }
        for (expected, snapshot) in history.iter().enumerate() {
            if snapshot.entity_id != entity.id {
                return Err(invalid(format!(
                    "frame {} belongs to {}",
                    snapshot.frame_index, snapshot.entity_id
                )));
            }
            if snapshot.frame_index as usize != expected {
                return Err(invalid(format!(
                    "expected frame {expected}, found {}",
                    snapshot.frame_index
                )));
            }
        }
        Ok(())
    }

    fn summarize(
        &self,
        entity: &Entity,
        observations: &[EvidenceObservation],
        snapshots: &[PosteriorSnapshot],
    ) -> Result<EntitySummary, TimelineError> {
        let last = snapshots.last().ok_or_else(|| TimelineError::InvalidHistory {
            entity_id: entity.id.clone(),
            reason: "timeline produced no frames".to_string(),
        })?;
        let last_event_at = observations
            .iter()
            .map(|o| o.occurred_at)
            .fold(self.window.start, |latest, at| latest.max(at));

        Ok(EntitySummary {
            entity_id: entity.id.clone(),
            p: last.p,
            c: last.c,
            s: last.s,
            risk_band: last.risk_band,
            frame_count: snapshots.len() as u32,
            observation_count: observations.len(),
            last_event_at,
        })
    }
}
