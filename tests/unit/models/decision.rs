//! Unit tests for decision records

use creditgate::models::decision::{REASON_FICO_BELOW_MINIMUM, REASON_MANUAL_REVIEW};
use creditgate::models::{Decision, DecisionSource, Verdict};

#[test]
fn test_risk_label_has_one_decimal() {
    let decision = Decision::approve(0.10, DecisionSource::Model);
    assert_eq!(decision.risk_label(), "10.0%");
    assert!((decision.risk_percent() - 10.0).abs() < 1e-9);

    let decision = Decision::reject(REASON_FICO_BELOW_MINIMUM, 0.88, DecisionSource::RuleFico);
    assert_eq!(decision.risk_label(), "88.0%");
}

#[test]
fn test_manual_review_is_not_an_approval() {
    let decision = Decision::manual_review(0.3);
    assert!(!decision.approved);
    assert_eq!(decision.verdict, Verdict::ManualReview);
    assert_eq!(decision.source, DecisionSource::ModelManualReview);
    assert_eq!(decision.reason, REASON_MANUAL_REVIEW);
}

#[test]
fn test_source_serializes_as_tag() {
    let json = serde_json::to_value(DecisionSource::ModelManualReview).unwrap();
    assert_eq!(json, "MODEL_MANUAL_REVIEW");
    let json = serde_json::to_value(DecisionSource::RuleFico).unwrap();
    assert_eq!(json, DecisionSource::RuleFico.as_str());
}

#[test]
fn test_decision_carries_no_timestamp() {
    let json = serde_json::to_value(Decision::approve(0.1, DecisionSource::Model)).unwrap();
    let fields: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        fields.len(),
        5,
        "unexpected decision fields: {:?}",
        fields
    );
    assert!(json.get("evaluated_at").is_none());
}
