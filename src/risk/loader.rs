//! Load-once model artifact loading.
//!
//! A failed load never aborts startup: the adapter comes back without a
//! model and every evaluation that reaches the model path reports
//! `ModelUnavailable` instead.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::features::FeatureSchema;
use crate::risk::adapter::RiskModelAdapter;
use crate::risk::logistic::{LogisticArtifact, LogisticModel};

#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("I/O error reading {0}: {1}")]
    Io(PathBuf, std::io::Error),
    #[error("malformed JSON in {0}: {1}")]
    Json(PathBuf, serde_json::Error),
    #[error("model incompatible with schema: {0}")]
    Incompatible(String),
}

pub type LoadResult<T> = std::result::Result<T, ModelLoadError>;

/// Read the ordered training-time column list.
pub fn load_schema(path: &Path) -> LoadResult<FeatureSchema> {
    let raw = fs::read_to_string(path).map_err(|e| ModelLoadError::Io(path.to_path_buf(), e))?;
    let columns: Vec<String> =
        serde_json::from_str(&raw).map_err(|e| ModelLoadError::Json(path.to_path_buf(), e))?;
    if columns.is_empty() {
        return Err(ModelLoadError::Incompatible(format!(
            "{} declares no columns",
            path.display()
        )));
    }
    Ok(FeatureSchema::new(columns))
}

pub fn load_artifact(path: &Path) -> LoadResult<LogisticArtifact> {
    let raw = fs::read_to_string(path).map_err(|e| ModelLoadError::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&raw).map_err(|e| ModelLoadError::Json(path.to_path_buf(), e))
}

/// Load model and schema into an available adapter.
pub fn load_model(model_path: &Path, schema_path: &Path) -> LoadResult<RiskModelAdapter> {
    let artifact = load_artifact(model_path)?;
    let schema = load_schema(schema_path)?.with_defaults(artifact.defaults.clone());
    let model = LogisticModel::from_artifact(&artifact, &schema)?;

    info!(
        model = %artifact.name,
        version = %artifact.version,
        columns = schema.len(),
        "Risk model loaded"
    );

    Ok(RiskModelAdapter::new(Arc::new(model), schema))
}

/// Load model and schema, degrading to a model-less adapter on failure.
pub fn load_or_degrade(model_path: &Path, schema_path: &Path) -> RiskModelAdapter {
    match load_model(model_path, schema_path) {
        Ok(adapter) => adapter,
        Err(e) => {
            warn!(
                error = %e,
                model_path = %model_path.display(),
                schema_path = %schema_path.display(),
                "Risk model unavailable - only rule rejections can be decided"
            );
            RiskModelAdapter::unavailable(e.to_string())
        }
    }
}
