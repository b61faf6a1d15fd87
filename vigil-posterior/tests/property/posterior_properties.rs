use std::sync::Arc;

use proptest::prelude::*;
use vigil_core::config::{PosteriorConfig, VigilConfig};
use vigil_core::entity::Entity;
use vigil_core::models::PillarVector;
use vigil_core::traits::FixedDriver;
use vigil_evidence::{EntityRng, StreamKind};
use vigil_posterior::frame::Frame;
use vigil_posterior::updater::{target_confidence, PosteriorState, PosteriorUpdater};
use vigil_posterior::{PosteriorEngine, Storyline};

fn loud_config() -> VigilConfig {
    let mut config = VigilConfig::default();
    let p = &mut config.posterior;
    p.seed_p_jitter = 1.0;
    p.target_p_jitter = 1.0;
    p.p_jitter = 1.0;
    p.seed_s_jitter = 1.0;
    p.target_s_jitter = 1.0;
    p.s_jitter = 1.0;
    p.confidence_jitter = 1.0;
    config.frame.relevant_activation_jitter = 1.0;
    config.frame.background_activation_jitter = 1.0;
    config.evidence.event_time_jitter = 1.0;
    config
}

// ── Scores stay in [0, 1] ────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn scores_bounded_under_extreme_noise(
        id in "[a-z]{3}-[0-9]{1,4}",
        p in -2.0f64..3.0,
        s in -2.0f64..3.0,
        coverage in 0.0f64..=1.0,
    ) {
        let engine = PosteriorEngine::new(
            test_fixtures::registry(),
            loud_config(),
            test_fixtures::window_end(),
        ).unwrap();
        let entity = test_fixtures::with_full_coverage(
            Entity::new(id, Arc::new(FixedDriver::new(p, s).with_relevant(["dtc_history"]))),
            coverage,
        );
        let assessment = engine.assess(&entity).unwrap();
        for snapshot in &assessment.snapshots {
            for v in [snapshot.p, snapshot.c, snapshot.s] {
                prop_assert!((0.0..=1.0).contains(&v));
            }
            prop_assert!(snapshot.band_is_consistent());
        }
    }

    #[test]
    fn storyline_snapshots_bounded(index in 0usize..10, n in 0u32..500) {
        let engine = PosteriorEngine::new(
            test_fixtures::registry(),
            VigilConfig::default(),
            test_fixtures::window_end(),
        ).unwrap();
        let entity = Storyline::for_fleet_index(index).entity(format!("veh-{n}"));
        let assessment = engine.assess(&entity).unwrap();
        for snapshot in &assessment.snapshots {
            prop_assert!(snapshot.band_is_consistent());
            prop_assert!((0.0..=1.0).contains(&snapshot.p));
        }
    }
}

// ── Update step ──────────────────────────────────────────────────────────

fn arb_frame() -> impl Strategy<Value = Frame> {
    (0usize..=8, 0usize..=8, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(
        |(observed, present, staleness, conflict)| Frame {
            vector: PillarVector::new(),
            observed_count: observed,
            present_count: present.min(observed),
            absent_count: 0,
            total: 8,
            missing_penalty: 1.0 - observed as f64 / 8.0,
            staleness_penalty: staleness,
            conflict,
        },
    )
}

proptest! {
    #[test]
    fn smoothing_step_is_bounded(
        prev_p in 0.0f64..=1.0,
        prev_s in 0.0f64..=1.0,
        target in -1.0f64..2.0,
        frame in arb_frame(),
        seed in any::<u64>(),
    ) {
        let cfg = PosteriorConfig::default();
        let updater = PosteriorUpdater::new(&cfg);
        let driver = FixedDriver::new(target, target);
        let mut rng = EntityRng::from_seed(seed).stream(StreamKind::Frame(0));
        let prev = PosteriorState { p: prev_p, s: prev_s };

        let update = updater.update("veh-p", &driver, 0.5, &frame, prev, &mut rng);

        prop_assert!((update.p - prev_p).abs() <= cfg.p_alpha + cfg.p_jitter + 1e-12);
        prop_assert!((update.s - prev_s).abs() <= cfg.s_alpha + cfg.s_jitter + 1e-12);
        prop_assert!((0.0..=1.0).contains(&update.c));
    }

    #[test]
    fn confidence_decreases_in_missingness(
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
        s in 0.0f64..=1.0,
    ) {
        prop_assume!(b - a > 1e-9);
        let cfg = PosteriorConfig::default();
        let ca = target_confidence(a, 0.0, 0.0, s, 0.0, &cfg);
        let cb = target_confidence(b, 0.0, 0.0, s, 0.0, &cfg);
        prop_assert!(cb < ca);
    }
}
