//! Credit evaluation engine: rule gate, then risk model, then aggregation.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::PolicyConfig;
use crate::decision::DecisionAggregator;
use crate::error::{EvaluationError, Result};
use crate::features::FeatureVectorBuilder;
use crate::metrics::Metrics;
use crate::models::{ApplicantProfile, Decision, DecisionPolicy};
use crate::risk::{ModelStatus, RiskModelAdapter};
use crate::rules::{GateOutcome, RuleGate};

/// Explicitly constructed evaluation service.
///
/// Holds only read-only state, so one instance can serve every request for
/// the lifetime of the process. Each call to [`CreditEvaluator::evaluate`]
/// is a pure function of the profile.
pub struct CreditEvaluator {
    gate: RuleGate,
    builder: FeatureVectorBuilder,
    adapter: RiskModelAdapter,
    policy: DecisionPolicy,
    metrics: Option<Arc<Metrics>>,
}

impl CreditEvaluator {
    pub fn new(policy: PolicyConfig, adapter: RiskModelAdapter) -> Self {
        Self {
            gate: RuleGate::new(policy.thresholds, policy.rule_risk),
            builder: FeatureVectorBuilder::new(policy.base_fill),
            adapter,
            policy: policy.decision,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn gate(&self) -> &RuleGate {
        &self.gate
    }

    pub fn decision_policy(&self) -> DecisionPolicy {
        self.policy
    }

    pub fn model_status(&self) -> ModelStatus {
        self.adapter.status()
    }

    /// Evaluate one applicant.
    ///
    /// Hard-rule rejections never reach the model. When the gate passes, any
    /// model-path failure is returned as an error; there is no default
    /// approval.
    pub fn evaluate(&self, profile: &ApplicantProfile) -> Result<Decision> {
        let outcome = self.evaluate_inner(profile);

        match &outcome {
            Ok(decision) => {
                info!(
                    fico = profile.fico_score(),
                    dti = profile.debt_to_income_pct(),
                    approved = decision.approved,
                    source = decision.source.as_str(),
                    reason = %decision.reason,
                    risk = %decision.risk_label(),
                    "Credit evaluation completed"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_decision(decision);
                }
            }
            Err(e) => {
                warn!(
                    fico = profile.fico_score(),
                    dti = profile.debt_to_income_pct(),
                    error = %e,
                    "Credit evaluation failed, no decision rendered"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_error(e);
                }
            }
        }

        outcome
    }

    fn evaluate_inner(&self, profile: &ApplicantProfile) -> Result<Decision> {
        let gate = self.gate.evaluate(profile);

        let probability = match gate {
            GateOutcome::Pass => Some(self.model_probability(profile)?),
            GateOutcome::Reject(_) => None,
        };

        DecisionAggregator::aggregate(gate, probability, &self.policy)
            .ok_or(EvaluationError::ModelUnavailable)
    }

    fn model_probability(&self, profile: &ApplicantProfile) -> Result<f64> {
        let schema = self.adapter.schema()?;
        let vector = self.builder.build(schema, profile)?;
        let (probability, elapsed) = self.adapter.predict(&vector)?;
        if let Some(metrics) = &self.metrics {
            metrics.observe_inference(elapsed);
        }
        Ok(probability)
    }
}
