//! Unit tests for the rule gate

use creditgate::models::decision::{REASON_DTI_ABOVE_MAXIMUM, REASON_FICO_BELOW_MINIMUM};
use creditgate::models::{DecisionSource, RuleRiskScores, RuleThresholds};
use creditgate::rules::{GateOutcome, RuleGate};

use crate::common_stub::profile;

fn gate() -> RuleGate {
    RuleGate::new(
        RuleThresholds {
            min_fico: 660,
            max_dti: 22.0,
        },
        RuleRiskScores {
            fico_reject: 0.88,
            dti_reject: 0.75,
        },
    )
}

fn rejection(outcome: GateOutcome) -> creditgate::models::Decision {
    match outcome {
        GateOutcome::Reject(decision) => decision,
        GateOutcome::Pass => panic!("expected a rule rejection"),
    }
}

#[test]
fn test_low_fico_is_rejected() {
    let decision = rejection(gate().evaluate(&profile(600, 15.0)));
    assert!(!decision.approved);
    assert_eq!(decision.reason, REASON_FICO_BELOW_MINIMUM);
    assert_eq!(decision.source, DecisionSource::RuleFico);
    assert_eq!(decision.risk_probability, 0.88);
}

#[test]
fn test_high_dti_is_rejected() {
    let decision = rejection(gate().evaluate(&profile(700, 30.0)));
    assert_eq!(decision.reason, REASON_DTI_ABOVE_MAXIMUM);
    assert_eq!(decision.source, DecisionSource::RuleDti);
    assert_eq!(decision.risk_probability, 0.75);
}

#[test]
fn test_fico_checked_before_dti() {
    let decision = rejection(gate().evaluate(&profile(500, 39.0)));
    assert_eq!(decision.reason, REASON_FICO_BELOW_MINIMUM);
}

#[test]
fn test_boundaries_pass() {
    // min_fico is inclusive, max_dti is inclusive
    assert!(gate().evaluate(&profile(660, 22.0)).is_pass());
    assert!(!gate().evaluate(&profile(659, 22.0)).is_pass());
    assert!(!gate().evaluate(&profile(660, 22.01)).is_pass());
}

#[test]
fn test_fico_rule_holds_for_every_dti() {
    for dti in [0.0, 10.0, 22.0, 30.0, 40.0] {
        for fico in [300, 500, 659] {
            let decision = rejection(gate().evaluate(&profile(fico, dti)));
            assert_eq!(decision.reason, REASON_FICO_BELOW_MINIMUM);
        }
    }
}

#[test]
fn test_custom_risk_scores_are_reported() {
    let gate = RuleGate::new(
        RuleThresholds {
            min_fico: 640,
            max_dti: 20.0,
        },
        RuleRiskScores {
            fico_reject: 0.80,
            dti_reject: 0.78,
        },
    );
    assert_eq!(rejection(gate.evaluate(&profile(630, 10.0))).risk_probability, 0.80);
    assert_eq!(rejection(gate.evaluate(&profile(700, 21.0))).risk_probability, 0.78);
    assert!(gate.evaluate(&profile(650, 20.0)).is_pass());
}
