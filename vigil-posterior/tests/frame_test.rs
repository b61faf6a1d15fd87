use chrono::Duration;
use vigil_core::config::FrameConfig;
use vigil_core::pillar::PillarState;
use vigil_core::traits::FixedDriver;
use vigil_evidence::{CoverageModel, EntityRng, StalenessClock, StreamKind};
use vigil_posterior::frame::{staleness_penalty, FrameEvaluator};

fn clock() -> StalenessClock {
    let window = test_fixtures::default_window();
    StalenessClock::new(&test_fixtures::registry(), window.start - Duration::days(21))
}

// ── Staleness penalty ────────────────────────────────────────────────────

#[test]
fn staleness_saturates_after_horizon() {
    assert_eq!(staleness_penalty(30.0, 30.0), 1.0);
    assert_eq!(staleness_penalty(45.0, 30.0), 1.0);
    assert_eq!(staleness_penalty(15.0, 30.0), 0.5);
    assert_eq!(staleness_penalty(0.0, 30.0), 0.0);
}

#[test]
fn frame_with_nothing_observed_reports_age_of_clock() {
    let registry = test_fixtures::registry();
    let config = FrameConfig::default();
    let evaluator = FrameEvaluator::new(&registry, &config);
    let coverage = CoverageModel::uniform(&registry, 0.0);
    let driver = FixedDriver::new(0.5, 0.5);
    let window = test_fixtures::default_window();
    let mut rng = EntityRng::for_entity("veh-1").stream(StreamKind::Frame(0));

    // 21 days before the window plus 10 in: 31 days without evidence.
    let mut c = clock();
    let frame = evaluator.evaluate(
        &driver,
        0.1,
        window.start + Duration::days(10),
        &coverage,
        &mut c,
        &mut rng,
    );
    assert_eq!(frame.staleness_penalty, 1.0);

    let mut c = clock();
    let frame = evaluator.evaluate(
        &driver,
        0.0,
        window.start - Duration::days(6),
        &coverage,
        &mut c,
        &mut rng,
    );
    assert_eq!(frame.staleness_penalty, 0.5);
}

// ── Missingness ──────────────────────────────────────────────────────────

#[test]
fn zero_coverage_frame_is_all_unknown() {
    let registry = test_fixtures::registry();
    let config = FrameConfig::default();
    let evaluator = FrameEvaluator::new(&registry, &config);
    let coverage = CoverageModel::uniform(&registry, 0.0);
    let driver = FixedDriver::new(0.9, 0.5).with_relevant(["dtc_history"]);
    let window = test_fixtures::default_window();
    let mut rng = EntityRng::for_entity("veh-1").stream(StreamKind::Frame(3));
    let mut c = clock();
    let before = c.clone();

    let frame = evaluator.evaluate(&driver, 0.5, window.at(0.5), &coverage, &mut c, &mut rng);

    assert_eq!(frame.vector.len(), registry.len());
    assert!(frame.vector.values().all(|s| *s == PillarState::Unknown));
    assert_eq!(frame.observed_count, 0);
    assert_eq!(frame.missing_penalty, 1.0);
    assert_eq!(frame.conflict, 0.0);
    assert_eq!(c, before);
}

#[test]
fn full_coverage_frame_includes_every_pillar() {
    let registry = test_fixtures::registry();
    let config = FrameConfig::default();
    let evaluator = FrameEvaluator::new(&registry, &config);
    let coverage = CoverageModel::uniform(&registry, 1.0);
    let driver = FixedDriver::new(0.9, 0.5).with_relevant(["dtc_history", "telematics"]);
    let window = test_fixtures::default_window();
    let at = window.at(1.0);
    let mut rng = EntityRng::for_entity("veh-2").stream(StreamKind::Frame(7));
    let mut c = clock();

    let frame = evaluator.evaluate(&driver, 1.0, at, &coverage, &mut c, &mut rng);

    assert_eq!(frame.vector.len(), 8);
    assert_eq!(frame.observed_count, 8);
    assert_eq!(frame.total, 8);
    assert_eq!(frame.missing_penalty, 0.0);
    assert_eq!(
        frame.present_count + frame.absent_count,
        frame.vector.values().filter(|s| s.is_known()).count()
    );
    // Every known read advanced its pillar to the checkpoint.
    for (pillar, state) in &frame.vector {
        if state.is_known() {
            assert_eq!(c.last_seen(pillar), Some(at));
        }
    }
    if frame.present_count + frame.absent_count > 0 {
        assert_eq!(frame.staleness_penalty, 0.0);
    }
}

#[test]
fn frame_is_reproducible_from_its_stream() {
    let registry = test_fixtures::registry();
    let config = FrameConfig::default();
    let evaluator = FrameEvaluator::new(&registry, &config);
    let coverage = CoverageModel::uniform(&registry, 0.7);
    let driver = FixedDriver::new(0.4, 0.4).with_relevant(["recall_status"]);
    let window = test_fixtures::default_window();

    let run = || {
        let mut rng = EntityRng::for_entity("veh-3").stream(StreamKind::Frame(2));
        let mut c = clock();
        evaluator.evaluate(&driver, 0.3, window.at(0.3), &coverage, &mut c, &mut rng)
    };
    assert_eq!(run(), run());
}
