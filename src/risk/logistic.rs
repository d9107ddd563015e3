//! Logistic-regression artifact, the JSON model format the loader reads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{EvaluationError, Result};
use crate::features::{FeatureSchema, FeatureVector};
use crate::risk::loader::ModelLoadError;
use crate::risk::model::RiskModel;

/// On-disk shape of the model file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    pub intercept: f64,
    pub coefficients: HashMap<String, f64>,
    /// Training-set column means, used when the base fill is `model_defaults`.
    #[serde(default)]
    pub defaults: HashMap<String, f64>,
}

fn default_version() -> String {
    "unversioned".to_string()
}

#[derive(Debug, Clone)]
pub struct LogisticModel {
    name: String,
    version: String,
    columns: Vec<String>,
    weights: Vec<f64>,
    intercept: f64,
}

impl LogisticModel {
    /// Align an artifact's coefficients to the schema's column order.
    ///
    /// Columns without a coefficient weigh zero; a coefficient for a column
    /// the schema does not declare is a load error.
    pub fn from_artifact(
        artifact: &LogisticArtifact,
        schema: &FeatureSchema,
    ) -> std::result::Result<Self, ModelLoadError> {
        let mut unknown: Vec<&str> = artifact
            .coefficients
            .keys()
            .filter(|name| !schema.contains(name))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            unknown.sort_unstable();
            return Err(ModelLoadError::Incompatible(format!(
                "coefficients for undeclared columns: {}",
                unknown.join(", ")
            )));
        }

        if !artifact.intercept.is_finite()
            || artifact.coefficients.values().any(|w| !w.is_finite())
        {
            return Err(ModelLoadError::Incompatible(
                "non-finite model parameter".to_string(),
            ));
        }

        let weights = schema
            .columns()
            .iter()
            .map(|column| artifact.coefficients.get(column).copied().unwrap_or(0.0))
            .collect();

        Ok(Self {
            name: artifact.name.clone(),
            version: artifact.version.clone(),
            columns: schema.columns().to_vec(),
            weights,
            intercept: artifact.intercept,
        })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl RiskModel for LogisticModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64> {
        if features.columns() != self.columns.as_slice() {
            let missing = self
                .columns
                .iter()
                .enumerate()
                .filter(|(idx, column)| features.columns().get(*idx) != Some(*column))
                .map(|(_, column)| column.clone())
                .collect();
            return Err(EvaluationError::SchemaMismatch { missing });
        }

        let logit: f64 = self.intercept
            + self
                .weights
                .iter()
                .zip(features.values())
                .map(|(w, x)| w * x)
                .sum::<f64>();

        Ok(sigmoid(logit))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn version(&self) -> &str {
        &self.version
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
