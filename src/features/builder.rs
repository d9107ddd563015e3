//! Assembles the fixed-schema vector the risk model was trained on.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EvaluationError, Result};
use crate::models::ApplicantProfile;

pub const FICO: &str = "fico";
pub const DTI: &str = "dti";
pub const INTEREST_RATE: &str = "int.rate";
pub const LOG_ANNUAL_INCOME: &str = "log.annual.inc";

/// Columns every schema must declare.
pub const REQUIRED_COLUMNS: [&str; 4] = [FICO, DTI, INTEREST_RATE, LOG_ANNUAL_INCOME];

/// Columns the model was trained on but the applicant never supplies.
pub const FILLER_VALUES: [(&str, f64); 5] = [
    ("credit.policy", 1.0),
    ("installment", 300.0),
    ("days.with.cr.line", 4000.0),
    ("revol.bal", 10000.0),
    ("revol.util", 50.0),
];

/// What unset columns start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseFill {
    Zeros,
    ModelDefaults,
}

impl FromStr for BaseFill {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zeros" | "zero" => Ok(BaseFill::Zeros),
            "model_defaults" | "defaults" => Ok(BaseFill::ModelDefaults),
            other => Err(format!("unknown base fill '{}'", other)),
        }
    }
}

impl fmt::Display for BaseFill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseFill::Zeros => write!(f, "zeros"),
            BaseFill::ModelDefaults => write!(f, "model_defaults"),
        }
    }
}

/// Ordered training-time column list, plus optional per-column defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSchema {
    columns: Vec<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    defaults: HashMap<String, f64>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            defaults: HashMap::new(),
        }
    }

    pub fn with_defaults(mut self, defaults: HashMap<String, f64>) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    pub fn default_for(&self, column: &str) -> Option<f64> {
        self.defaults.get(column).copied()
    }

    /// Required columns this schema does not declare.
    pub fn missing_required(&self) -> Vec<String> {
        REQUIRED_COLUMNS
            .iter()
            .filter(|name| !self.contains(name))
            .map(|name| name.to_string())
            .collect()
    }
}

/// Numeric row in exactly the schema's column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|idx| self.values[idx])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn set(&mut self, idx: usize, value: f64) {
        self.values[idx] = value;
    }
}

pub struct FeatureVectorBuilder {
    base_fill: BaseFill,
}

impl FeatureVectorBuilder {
    pub fn new(base_fill: BaseFill) -> Self {
        Self { base_fill }
    }

    /// Build a vector for `profile` against `schema`.
    ///
    /// Live fields overwrite the base, then fillers are applied. Fillers the
    /// schema does not declare are skipped so the column set never drifts
    /// from the one the model was trained on.
    pub fn build(&self, schema: &FeatureSchema, profile: &ApplicantProfile) -> Result<FeatureVector> {
        let missing = schema.missing_required();
        if !missing.is_empty() {
            return Err(EvaluationError::SchemaMismatch { missing });
        }

        let values = schema
            .columns()
            .iter()
            .map(|column| match self.base_fill {
                BaseFill::Zeros => 0.0,
                BaseFill::ModelDefaults => schema.default_for(column).unwrap_or(0.0),
            })
            .collect();

        let mut vector = FeatureVector {
            columns: schema.columns().to_vec(),
            values,
        };

        let live = [
            (FICO, profile.fico_score() as f64),
            (DTI, profile.debt_to_income_pct()),
            (INTEREST_RATE, profile.interest_rate()),
            (LOG_ANNUAL_INCOME, profile.log_annual_income()),
        ];

        for (column, value) in live.into_iter().chain(FILLER_VALUES) {
            if let Some(idx) = schema.position(column) {
                vector.set(idx, value);
            }
        }

        Ok(vector)
    }
}

impl Default for FeatureVectorBuilder {
    fn default() -> Self {
        Self::new(BaseFill::Zeros)
    }
}
