use chrono::{TimeZone, Utc};
use vigil_core::errors::*;

#[test]
fn registry_duplicate_carries_name() {
    let err = RegistryError::DuplicatePillar {
        name: "telematics".into(),
    };
    assert!(err.to_string().contains("telematics"));
}

#[test]
fn config_validation_carries_field_and_message() {
    let err = ConfigError::ValidationFailed {
        field: "posterior.p_alpha".into(),
        message: "must be in (0.0, 1.0]".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("posterior.p_alpha"));
    assert!(msg.contains("(0.0, 1.0]"));
}

#[test]
fn out_of_order_carries_both_timestamps() {
    let err = EvidenceError::OutOfOrder {
        observation_id: "obs-7".into(),
        occurred_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        previous: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    };
    let msg = err.to_string();
    assert!(msg.contains("obs-7"));
    assert!(msg.contains("2024-01-01"));
    assert!(msg.contains("2024-02-01"));
}

#[test]
fn vigil_error_wraps_subsystem_errors() {
    let err: VigilError = RegistryError::Empty.into();
    assert!(matches!(err, VigilError::Registry(RegistryError::Empty)));
    assert!(err.to_string().starts_with("Registry error"));

    let err: VigilError = TimelineError::InvalidHistory {
        entity_id: "veh-1".into(),
        reason: "empty".into(),
    }
    .into();
    assert!(err.to_string().contains("veh-1"));
}

#[test]
fn error_codes_follow_subsystem() {
    let evidence: VigilError = EvidenceError::NonFiniteConfidence {
        observation_id: "x".into(),
    }
    .into();
    assert_eq!(evidence.error_code(), error_code::EVIDENCE_ERROR);

    let config: VigilError = ConfigError::FileNotFound { path: "x".into() }.into();
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let registry: VigilError = RegistryError::Empty.into();
    assert_eq!(registry.error_code(), error_code::REGISTRY_ERROR);
}
