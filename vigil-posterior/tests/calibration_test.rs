//! Backtests against drivers with a known trajectory and known coverage.

use vigil_core::config::VigilConfig;
use vigil_core::models::RiskBand;
use vigil_posterior::PosteriorEngine;

fn engine(config: VigilConfig) -> PosteriorEngine {
    PosteriorEngine::new(test_fixtures::registry(), config, test_fixtures::window_end()).unwrap()
}

#[test]
fn full_coverage_converges_to_driver() {
    let engine = engine(test_fixtures::quiet_config());
    for id in test_fixtures::fleet_ids(10) {
        let entity = test_fixtures::with_full_coverage(
            test_fixtures::fixed_entity(&id, 0.9, 0.5, &["dtc_history"]),
            1.0,
        );
        let assessment = engine.assess(&entity).unwrap();
        assert!((assessment.summary.p - 0.9).abs() < 0.005, "{id}: {}", assessment.summary.p);
        assert_eq!(assessment.summary.risk_band, RiskBand::Critical);
    }
}

#[test]
fn full_coverage_with_noise_stays_near_driver() {
    let engine = engine(VigilConfig::default());
    for id in test_fixtures::fleet_ids(20) {
        let entity = test_fixtures::with_full_coverage(
            test_fixtures::fixed_entity(&id, 0.9, 0.5, &["dtc_history"]),
            1.0,
        );
        let assessment = engine.assess(&entity).unwrap();
        assert!((assessment.summary.p - 0.9).abs() < 0.15, "{id}: {}", assessment.summary.p);
    }
}

#[test]
fn zero_coverage_regresses_to_prior_blend() {
    let engine = engine(test_fixtures::quiet_config());
    let expected = 0.9 * 0.65 + 0.06 * 0.35;
    for id in test_fixtures::fleet_ids(10) {
        let entity = test_fixtures::with_full_coverage(
            test_fixtures::fixed_entity(&id, 0.9, 0.5, &["dtc_history"]),
            0.0,
        );
        let assessment = engine.assess(&entity).unwrap();
        assert!(assessment.observations.is_empty());
        assert!((assessment.summary.p - expected).abs() < 0.005, "{id}: {}", assessment.summary.p);
        // Nothing observed and nothing fresh: confidence bottoms out.
        assert!(assessment.snapshots.iter().all(|s| s.c == 0.0));
    }
}

#[test]
fn zero_coverage_with_full_missing_weight_lands_on_prior() {
    let mut config = test_fixtures::quiet_config();
    config.posterior.missing_evidence_weight = 1.0;
    let engine = engine(config);
    for id in test_fixtures::fleet_ids(10) {
        let entity = test_fixtures::with_full_coverage(
            test_fixtures::fixed_entity(&id, 0.5, 0.5, &["telematics"]),
            0.0,
        );
        let assessment = engine.assess(&entity).unwrap();
        assert!((assessment.summary.p - 0.06).abs() < 0.005, "{id}: {}", assessment.summary.p);
        assert_eq!(assessment.summary.risk_band, RiskBand::Low);
    }
}

#[test]
fn lower_coverage_lowers_mean_confidence() {
    let engine = engine(test_fixtures::quiet_config());
    let mean_c = |coverage: f64| {
        let ids = test_fixtures::fleet_ids(30);
        let total: f64 = ids
            .iter()
            .map(|id| {
                let entity = test_fixtures::with_full_coverage(
                    test_fixtures::fixed_entity(id, 0.5, 0.5, &["dtc_history"]),
                    coverage,
                );
                engine.assess(&entity).unwrap().summary.c
            })
            .sum();
        total / ids.len() as f64
    };
    assert!(mean_c(1.0) > mean_c(0.5));
    assert!(mean_c(0.5) > mean_c(0.1));
}

#[test]
fn entity_without_observations_still_gets_snapshots() {
    let engine = engine(VigilConfig::default());
    let entity = test_fixtures::fixed_entity("veh-empty", 0.4, 0.4, &["telematics"])
        .with_observations(Vec::new());
    let assessment = engine.assess(&entity).unwrap();
    assert!(assessment.observations.is_empty());
    assert!(!assessment.snapshots.is_empty());
    assert_eq!(assessment.summary.observation_count, 0);
    assert_eq!(assessment.summary.last_event_at, engine.window().start);
}
