//! Narrow adapter in front of the optional risk model.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::{EvaluationError, Result};
use crate::features::{FeatureSchema, FeatureVector};
use crate::risk::model::RiskModel;

/// Snapshot of the adapter for operators.
#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
    pub model_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
    pub column_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_error: Option<String>,
}

/// Holds the read-only model for the lifetime of the process.
#[derive(Clone)]
pub struct RiskModelAdapter {
    loaded: Option<(Arc<dyn RiskModel>, FeatureSchema)>,
    load_error: Option<String>,
}

impl fmt::Debug for RiskModelAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("RiskModelAdapter");
        match &self.loaded {
            Some((model, schema)) => out
                .field("model", &model.name())
                .field("version", &model.version())
                .field("columns", &schema.len()),
            None => out.field("load_error", &self.load_error),
        };
        out.finish()
    }
}

impl RiskModelAdapter {
    pub fn new(model: Arc<dyn RiskModel>, schema: FeatureSchema) -> Self {
        Self {
            loaded: Some((model, schema)),
            load_error: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            loaded: None,
            load_error: Some(reason.into()),
        }
    }

    pub fn is_available(&self) -> bool {
        self.loaded.is_some()
    }

    /// Schema the model was trained against.
    pub fn schema(&self) -> Result<&FeatureSchema> {
        self.loaded
            .as_ref()
            .map(|(_, schema)| schema)
            .ok_or(EvaluationError::ModelUnavailable)
    }

    /// Run the model and return the default probability, timed in seconds.
    pub fn predict(&self, features: &FeatureVector) -> Result<(f64, f64)> {
        let (model, _) = self
            .loaded
            .as_ref()
            .ok_or(EvaluationError::ModelUnavailable)?;

        let start = Instant::now();
        let probability = model.predict(features)?;
        let elapsed = start.elapsed().as_secs_f64();

        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(EvaluationError::Prediction(format!(
                "{} returned {} outside [0, 1]",
                model.name(),
                probability
            )));
        }

        debug!(model = model.name(), probability, "Model prediction");
        Ok((probability, elapsed))
    }

    pub fn status(&self) -> ModelStatus {
        match &self.loaded {
            Some((model, schema)) => ModelStatus {
                model_loaded: true,
                model_name: Some(model.name().to_string()),
                model_version: Some(model.version().to_string()),
                column_count: schema.len(),
                load_error: None,
            },
            None => ModelStatus {
                model_loaded: false,
                model_name: None,
                model_version: None,
                column_count: 0,
                load_error: self.load_error.clone(),
            },
        }
    }
}
