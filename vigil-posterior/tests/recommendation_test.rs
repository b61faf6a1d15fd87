use vigil_core::models::{EntitySummary, RiskBand};
use vigil_posterior::{ServiceRecommendation, ServiceUrgency};

fn summary(p: f64) -> EntitySummary {
    EntitySummary {
        entity_id: "veh-1".to_string(),
        p,
        c: 0.7,
        s: 0.5,
        risk_band: RiskBand::classify(p),
        frame_count: 10,
        observation_count: 12,
        last_event_at: test_fixtures::window_end(),
    }
}

#[test]
fn urgency_follows_band() {
    let cases = [
        (0.92, true, ServiceUrgency::Immediate),
        (0.8, true, ServiceUrgency::Immediate),
        (0.65, true, ServiceUrgency::Soon),
        (0.3, true, ServiceUrgency::Routine),
        (0.12, false, ServiceUrgency::None),
    ];
    for (p, recommended, urgency) in cases {
        let rec = ServiceRecommendation::from_summary(&summary(p), false);
        assert_eq!(rec.recommended, recommended, "p = {p}");
        assert_eq!(rec.urgency, urgency, "p = {p}");
    }
}

#[test]
fn hold_overrides_critical() {
    let rec = ServiceRecommendation::from_summary(&summary(0.95), true);
    assert!(!rec.recommended);
    assert_eq!(rec.urgency, ServiceUrgency::None);
    assert!(rec.reason.contains("Hold"));
}

#[test]
fn reason_quotes_probability() {
    let rec = ServiceRecommendation::from_summary(&summary(0.8123), false);
    assert!(rec.reason.contains("0.812"));
}

#[test]
fn urgency_serializes_lowercase() {
    let json = serde_json::to_string(&ServiceUrgency::Immediate).unwrap();
    assert_eq!(json, "\"immediate\"");
    assert!(ServiceUrgency::Immediate > ServiceUrgency::Routine);
}
