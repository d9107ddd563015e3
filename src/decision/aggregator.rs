//! Combines the gate outcome and model probability into a final decision.

use crate::models::decision::REASON_MODEL_RISK_DETECTED;
use crate::models::{Decision, DecisionPolicy, DecisionSource};
use crate::rules::GateOutcome;

pub struct DecisionAggregator;

impl DecisionAggregator {
    /// Final decision for one evaluation.
    ///
    /// A gate rejection is returned verbatim and `model_probability` is
    /// ignored. Returns `None` only when the gate passed but no probability
    /// was supplied.
    pub fn aggregate(
        gate: GateOutcome,
        model_probability: Option<f64>,
        policy: &DecisionPolicy,
    ) -> Option<Decision> {
        match gate {
            GateOutcome::Reject(decision) => Some(decision),
            GateOutcome::Pass => {
                model_probability.map(|probability| Self::from_probability(probability, policy))
            }
        }
    }

    /// Apply the decision policy to a model probability.
    pub fn from_probability(probability: f64, policy: &DecisionPolicy) -> Decision {
        match *policy {
            DecisionPolicy::TwoWay { threshold } => {
                if probability > threshold {
                    Decision::reject(REASON_MODEL_RISK_DETECTED, probability, DecisionSource::Model)
                } else {
                    Decision::approve(probability, DecisionSource::Model)
                }
            }
            DecisionPolicy::Banded {
                approve_max,
                reject_above,
            } => {
                if probability > reject_above {
                    Decision::reject(REASON_MODEL_RISK_DETECTED, probability, DecisionSource::Model)
                } else if probability > approve_max {
                    Decision::manual_review(probability)
                } else {
                    Decision::approve(probability, DecisionSource::Model)
                }
            }
        }
    }
}
