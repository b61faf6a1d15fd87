use vigil_core::errors::EvidenceError;
use vigil_core::pillar::{Pillar, PillarState};
use vigil_evidence::validate_batch;

#[test]
fn valid_batch_passes_and_clamps_confidence() {
    let registry = test_fixtures::registry();
    let mut a = test_fixtures::observation_at("veh-1", 0, "telematics", PillarState::Present, 3);
    a.confidence = 1.4;
    let b = test_fixtures::observation_at("veh-1", 1, "telematics", PillarState::Absent, 3);
    let validated = validate_batch("veh-1", &registry, &[a, b]).unwrap();
    assert_eq!(validated.len(), 2);
    assert_eq!(validated[0].confidence, 1.0);
}

#[test]
fn foreign_observation_is_rejected() {
    let registry = test_fixtures::registry();
    let obs = test_fixtures::observation_at("veh-2", 0, "telematics", PillarState::Present, 3);
    let err = validate_batch("veh-1", &registry, &[obs]).unwrap_err();
    assert!(matches!(err, EvidenceError::EntityMismatch { .. }));
}

#[test]
fn unknown_pillar_is_rejected() {
    let registry = test_fixtures::registry();
    let mut obs = test_fixtures::observation_at("veh-1", 0, "telematics", PillarState::Present, 3);
    obs.pillar = Pillar::new("odometer");
    let err = validate_batch("veh-1", &registry, &[obs]).unwrap_err();
    assert!(matches!(err, EvidenceError::UnknownPillar { ref pillar, .. } if pillar == "odometer"));
}

#[test]
fn out_of_order_batch_is_rejected() {
    let registry = test_fixtures::registry();
    let late = test_fixtures::observation_at("veh-1", 0, "telematics", PillarState::Present, 40);
    let early = test_fixtures::observation_at("veh-1", 1, "recall_status", PillarState::Present, 10);
    let err = validate_batch("veh-1", &registry, &[late, early]).unwrap_err();
    assert!(matches!(err, EvidenceError::OutOfOrder { .. }));
}

#[test]
fn nan_confidence_is_rejected() {
    let registry = test_fixtures::registry();
    let mut obs = test_fixtures::observation_at("veh-1", 0, "telematics", PillarState::Present, 3);
    obs.confidence = f64::NAN;
    let err = validate_batch("veh-1", &registry, &[obs]).unwrap_err();
    assert!(matches!(err, EvidenceError::NonFiniteConfidence { .. }));
}

#[test]
fn empty_batch_is_valid() {
    let registry = test_fixtures::registry();
    assert!(validate_batch("veh-1", &registry, &[]).unwrap().is_empty());
}
