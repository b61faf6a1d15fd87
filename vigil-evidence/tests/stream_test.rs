use vigil_core::config::EvidenceConfig;
use vigil_core::pillar::{Pillar, PillarState};
use vigil_evidence::{CoverageModel, EntityRng, EvidenceStreamGenerator, StreamKind};

fn generate(
    entity: &vigil_core::Entity,
    coverage: f64,
    events: u32,
) -> Vec<vigil_core::EvidenceObservation> {
    let registry = test_fixtures::registry();
    let config = EvidenceConfig::default();
    let window = test_fixtures::default_window();
    let coverage = CoverageModel::uniform(&registry, coverage);
    let generator = EvidenceStreamGenerator::new(&registry, &config);
    let mut rng = EntityRng::for_entity(&entity.id).stream(StreamKind::Evidence);
    generator.generate(entity, &window, &coverage, events, &mut rng)
}

#[test]
fn stream_is_chronological_and_inside_window() {
    let entity = test_fixtures::fixed_entity("veh-1", 0.5, 0.5, &["dtc_history", "telematics"]);
    let observations = generate(&entity, 0.8, 29);
    let window = test_fixtures::default_window();
    assert!(!observations.is_empty());
    for pair in observations.windows(2) {
        assert!(pair[0].occurred_at <= pair[1].occurred_at);
    }
    for obs in &observations {
        assert!(obs.occurred_at >= window.start && obs.occurred_at <= window.end);
        assert_eq!(obs.entity_id, "veh-1");
        assert!((0.0..=1.0).contains(&obs.confidence));
        // Two-decimal precision
        assert!(((obs.confidence * 100.0).round() - obs.confidence * 100.0).abs() < 1e-9);
    }
}

#[test]
fn stream_is_deterministic() {
    let entity = test_fixtures::fixed_entity("veh-7", 0.5, 0.5, &["recall_status"]);
    assert_eq!(generate(&entity, 0.7, 20), generate(&entity, 0.7, 20));
}

#[test]
fn zero_coverage_rejects_everything() {
    let entity = test_fixtures::fixed_entity("veh-2", 0.9, 0.5, &["dtc_history"]);
    assert!(generate(&entity, 0.0, 29).is_empty());
}

#[test]
fn full_coverage_accepts_every_candidate() {
    let entity = test_fixtures::fixed_entity("veh-3", 0.9, 0.5, &["dtc_history"]);
    assert_eq!(generate(&entity, 1.0, 17).len(), 17);
}

#[test]
fn events_favor_relevant_pillars() {
    let mut relevant_hits = 0usize;
    let mut total = 0usize;
    for id in test_fixtures::fleet_ids(40) {
        let entity = test_fixtures::fixed_entity(&id, 0.5, 0.5, &["recall_status"]);
        for obs in generate(&entity, 1.0, 25) {
            total += 1;
            if obs.pillar == Pillar::new("recall_status") {
                relevant_hits += 1;
            }
        }
    }
    // 80% picks from the single relevant pillar plus 1/8 of the off-pattern picks.
    let share = relevant_hits as f64 / total as f64;
    assert!(share > 0.7, "relevant share {share}");
}

#[test]
fn relevant_pillars_skew_present() {
    let mut present = 0usize;
    let mut total = 0usize;
    for id in test_fixtures::fleet_ids(40) {
        let entity = test_fixtures::fixed_entity(&id, 0.5, 0.5, &["telematics"]);
        for obs in generate(&entity, 1.0, 25) {
            if obs.pillar == Pillar::new("telematics") {
                total += 1;
                if obs.state == PillarState::Present {
                    present += 1;
                }
            }
        }
    }
    let share = present as f64 / total as f64;
    assert!((0.5..0.8).contains(&share), "present share {share}");
}

#[test]
fn driver_without_relevant_pillars_picks_uniformly() {
    let entity = test_fixtures::fixed_entity("veh-9", 0.5, 0.5, &[]);
    let observations = generate(&entity, 1.0, 29);
    assert_eq!(observations.len(), 29);
    let distinct: std::collections::BTreeSet<_> =
        observations.iter().map(|o| o.pillar.clone()).collect();
    assert!(distinct.len() > 3);
}

#[test]
fn observation_ids_are_unique() {
    let entity = test_fixtures::fixed_entity("veh-4", 0.5, 0.5, &["dtc_history"]);
    let observations = generate(&entity, 1.0, 29);
    let ids: std::collections::HashSet<_> = observations.iter().map(|o| o.id).collect();
    assert_eq!(ids.len(), observations.len());
}
