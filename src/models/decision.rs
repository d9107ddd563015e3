//! Evaluation result handed back to the presentation layer.

use serde::{Deserialize, Serialize};

pub const REASON_FICO_BELOW_MINIMUM: &str = "fico_below_minimum";
pub const REASON_DTI_ABOVE_MAXIMUM: &str = "dti_above_maximum";
pub const REASON_MODEL_RISK_DETECTED: &str = "model_risk_detected";
pub const REASON_MANUAL_REVIEW: &str = "manual_review_required";
pub const REASON_MODEL_APPROVED: &str = "model_risk_acceptable";

/// Which stage produced the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionSource {
    RuleFico,
    RuleDti,
    Model,
    ModelManualReview,
}

impl DecisionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionSource::RuleFico => "RULE_FICO",
            DecisionSource::RuleDti => "RULE_DTI",
            DecisionSource::Model => "MODEL",
            DecisionSource::ModelManualReview => "MODEL_MANUAL_REVIEW",
        }
    }
}

/// Three-way reading of a decision. Two-way policies only produce
/// `Approved` and `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    ManualReview,
    Rejected,
}

/// Pure result of one evaluation. Identical inputs give equal decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub approved: bool,
    pub verdict: Verdict,
    pub reason: String,
    /// Probability of default in [0, 1].
    pub risk_probability: f64,
    pub source: DecisionSource,
}

impl Decision {
    pub fn approve(risk_probability: f64, source: DecisionSource) -> Self {
        Self::build(Verdict::Approved, REASON_MODEL_APPROVED, risk_probability, source)
    }

    pub fn reject(reason: &str, risk_probability: f64, source: DecisionSource) -> Self {
        Self::build(Verdict::Rejected, reason, risk_probability, source)
    }

    pub fn manual_review(risk_probability: f64) -> Self {
        Self::build(
            Verdict::ManualReview,
            REASON_MANUAL_REVIEW,
            risk_probability,
            DecisionSource::ModelManualReview,
        )
    }

    fn build(verdict: Verdict, reason: &str, risk_probability: f64, source: DecisionSource) -> Self {
        Self {
            approved: verdict == Verdict::Approved,
            verdict,
            reason: reason.to_string(),
            risk_probability,
            source,
        }
    }

    /// Risk probability as a percentage, e.g. 10.0 for 0.10.
    pub fn risk_percent(&self) -> f64 {
        self.risk_probability * 100.0
    }

    /// One decimal place, matching the dashboard metric ("10.0%").
    pub fn risk_label(&self) -> String {
        format!("{:.1}%", self.risk_percent())
    }
}
