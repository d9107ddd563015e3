//! Environment-driven configuration.
//!
//! Every policy constant is read here once at startup and passed down
//! explicitly; nothing below this module hardcodes a cutoff.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;
use tracing::warn;

use crate::features::BaseFill;
use crate::models::policy::{DecisionPolicy, RuleRiskScores, RuleThresholds};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MODEL_PATH: &str = "model/risk_model.json";
pub const DEFAULT_SCHEMA_PATH: &str = "model/model_columns.json";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} = {value} is not a probability in [0, 1]")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("reject band ({reject_above}) must sit above approve band ({approve_max})")]
    InvertedBands { approve_max: f64, reject_above: f64 },
    #[error("max_dti = {0} must be a non-negative number")]
    InvalidMaxDti(f64),
}

/// Current deployment environment (`APP_ENV`), defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Policy knobs consumed by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolicyConfig {
    pub thresholds: RuleThresholds,
    pub rule_risk: RuleRiskScores,
    pub decision: DecisionPolicy,
    pub base_fill: BaseFill,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            thresholds: RuleThresholds::default(),
            rule_risk: RuleRiskScores::default(),
            decision: DecisionPolicy::default(),
            base_fill: BaseFill::Zeros,
        }
    }
}

impl PolicyConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_dti = self.thresholds.max_dti;
        if max_dti.is_nan() || max_dti < 0.0 {
            return Err(ConfigError::InvalidMaxDti(self.thresholds.max_dti));
        }
        self.rule_risk.validate()?;
        self.decision.validate()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub policy: PolicyConfig,
    pub model_path: PathBuf,
    pub schema_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            policy: PolicyConfig::default(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
        }
    }
}

impl Config {
    /// Load from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unparseable values fall back to
    /// their defaults with a warning; inconsistent policies are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let policy_defaults = defaults.policy;

        let thresholds = RuleThresholds {
            min_fico: parse_or(&lookup, "CREDIT_MIN_FICO", policy_defaults.thresholds.min_fico),
            max_dti: parse_or(&lookup, "CREDIT_MAX_DTI", policy_defaults.thresholds.max_dti),
        };

        let rule_risk = RuleRiskScores {
            fico_reject: parse_or(
                &lookup,
                "CREDIT_FICO_REJECT_RISK",
                policy_defaults.rule_risk.fico_reject,
            ),
            dti_reject: parse_or(
                &lookup,
                "CREDIT_DTI_REJECT_RISK",
                policy_defaults.rule_risk.dti_reject,
            ),
        };

        let model_threshold: f64 = parse_or(&lookup, "CREDIT_MODEL_THRESHOLD", 0.25);
        let reject_threshold: Option<f64> = lookup("CREDIT_REJECT_THRESHOLD")
            .and_then(|raw| match raw.trim().parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(key = "CREDIT_REJECT_THRESHOLD", value = %raw, "Ignoring unparseable value");
                    None
                }
            });

        let decision = match reject_threshold {
            Some(reject_above) => DecisionPolicy::Banded {
                approve_max: model_threshold,
                reject_above,
            },
            None => DecisionPolicy::TwoWay {
                threshold: model_threshold,
            },
        };

        let policy = PolicyConfig {
            thresholds,
            rule_risk,
            decision,
            base_fill: parse_or(&lookup, "CREDIT_BASE_FILL", policy_defaults.base_fill),
        };
        policy.validate()?;

        Ok(Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            policy,
            model_path: lookup("CREDIT_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            schema_path: lookup("CREDIT_SCHEMA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.schema_path),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(key = key, value = %raw, "Unparseable config value, using default");
            default
        }),
        None => default,
    }
}
