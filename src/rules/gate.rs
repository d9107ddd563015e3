//! Hard-threshold checks that can decide before any model is consulted.

use tracing::debug;

use crate::models::decision::{REASON_DTI_ABOVE_MAXIMUM, REASON_FICO_BELOW_MINIMUM};
use crate::models::{ApplicantProfile, Decision, DecisionSource, RuleRiskScores, RuleThresholds};

/// Result of running the gate.
#[derive(Debug, Clone)]
pub enum GateOutcome {
    /// No rule fired; the model decides.
    Pass,
    /// A rule fired; this decision is final.
    Reject(Decision),
}

impl GateOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, GateOutcome::Pass)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RuleGate {
    thresholds: RuleThresholds,
    risk: RuleRiskScores,
}

impl RuleGate {
    pub fn new(thresholds: RuleThresholds, risk: RuleRiskScores) -> Self {
        Self { thresholds, risk }
    }

    pub fn thresholds(&self) -> RuleThresholds {
        self.thresholds
    }

    pub fn risk_scores(&self) -> RuleRiskScores {
        self.risk
    }

    /// FICO is always checked before DTI, so an applicant failing both is
    /// reported as a FICO rejection.
    pub fn evaluate(&self, profile: &ApplicantProfile) -> GateOutcome {
        if profile.fico_score() < self.thresholds.min_fico {
            debug!(
                fico = profile.fico_score(),
                min_fico = self.thresholds.min_fico,
                "FICO rule rejected applicant"
            );
            return GateOutcome::Reject(Decision::reject(
                REASON_FICO_BELOW_MINIMUM,
                self.risk.fico_reject,
                DecisionSource::RuleFico,
            ));
        }

        if profile.debt_to_income_pct() > self.thresholds.max_dti {
            debug!(
                dti = profile.debt_to_income_pct(),
                max_dti = self.thresholds.max_dti,
                "DTI rule rejected applicant"
            );
            return GateOutcome::Reject(Decision::reject(
                REASON_DTI_ABOVE_MAXIMUM,
                self.risk.dti_reject,
                DecisionSource::RuleDti,
            ));
        }

        GateOutcome::Pass
    }
}

impl Default for RuleGate {
    fn default() -> Self {
        Self::new(RuleThresholds::default(), RuleRiskScores::default())
    }
}
