use chrono::Duration;
use proptest::prelude::*;
use vigil_core::pillar::PillarState;
use vigil_evidence::{CoverageModel, EntityRng, StalenessClock, StreamKind};

fn arb_state() -> impl Strategy<Value = PillarState> {
    prop_oneof![
        Just(PillarState::Present),
        Just(PillarState::Absent),
        Just(PillarState::Unknown),
    ]
}

fn arb_pillar() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("dtc_history"),
        Just("recall_status"),
        Just("telematics"),
        Just("field_reports"),
    ]
}

// ── Monotonic staleness ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn staleness_entries_never_decrease(
        updates in proptest::collection::vec((arb_pillar(), arb_state(), 0i64..90), 1..60),
    ) {
        let window = test_fixtures::default_window();
        let registry = test_fixtures::registry();
        let mut clock = StalenessClock::new(&registry, window.start - Duration::days(21));

        for (i, (pillar, state, day)) in updates.into_iter().enumerate() {
            let before: Vec<_> = clock.iter().map(|(p, t)| (p.clone(), t)).collect();
            let obs = test_fixtures::observation_at("veh-p", i as u64, pillar, state, day);
            clock.observe(&obs);
            for (p, t) in before {
                prop_assert!(clock.last_seen(&p).unwrap() >= t);
            }
        }
    }
}

// ── Coverage draws ───────────────────────────────────────────────────────

proptest! {
    #[test]
    fn drawn_coverage_in_unit_interval(seed in any::<u64>()) {
        let registry = test_fixtures::registry();
        let mut plan = EntityRng::from_seed(seed).stream(StreamKind::Plan);
        let model = CoverageModel::draw(&registry, &mut plan);
        for (_, c) in model.iter() {
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn lowering_coverage_never_lowers_expected_missingness(
        base in 0.0f64..=1.0,
        lowered in 0.0f64..=1.0,
        idx in 0usize..8,
    ) {
        prop_assume!(lowered <= base);
        let registry = test_fixtures::registry();
        let pillar = registry.specs()[idx].pillar.clone();
        let a = CoverageModel::uniform(&registry, base);
        let b = a.clone().with_override(&pillar, lowered);
        prop_assert!(b.expected_missing_penalty() >= a.expected_missing_penalty() - 1e-12);
    }
}
