//! Credit policy configuration: hard-rule cutoffs and model decision bands.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Hard-rule cutoffs applied before any model is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleThresholds {
    pub min_fico: u16,
    pub max_dti: f64,
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            min_fico: 660,
            max_dti: 22.0,
        }
    }
}

/// Synthetic default probabilities reported when a hard rule rejects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleRiskScores {
    pub fico_reject: f64,
    pub dti_reject: f64,
}

impl Default for RuleRiskScores {
    fn default() -> Self {
        Self {
            fico_reject: 0.88,
            dti_reject: 0.75,
        }
    }
}

impl RuleRiskScores {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("fico_reject", self.fico_reject)?;
        check_probability("dti_reject", self.dti_reject)
    }
}

/// How a model probability becomes a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum DecisionPolicy {
    /// Reject when probability > `threshold`, approve otherwise.
    TwoWay { threshold: f64 },
    /// Approve when probability <= `approve_max`, reject when > `reject_above`,
    /// manual review in between.
    Banded { approve_max: f64, reject_above: f64 },
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        DecisionPolicy::TwoWay { threshold: 0.25 }
    }
}

impl DecisionPolicy {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            DecisionPolicy::TwoWay { threshold } => check_probability("threshold", threshold),
            DecisionPolicy::Banded {
                approve_max,
                reject_above,
            } => {
                check_probability("approve_max", approve_max)?;
                check_probability("reject_above", reject_above)?;
                if reject_above <= approve_max {
                    return Err(ConfigError::InvertedBands {
                        approve_max,
                        reject_above,
                    });
                }
                Ok(())
            }
        }
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}
