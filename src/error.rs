//! Error taxonomy for a single evaluation.

/// Reasons an evaluation can end without a decision.
///
/// None of these is ever turned into an approval by the engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error("risk model unavailable")]
    ModelUnavailable,

    #[error("model schema is missing required columns: {}", missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    InvalidProfile {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("model prediction failed: {0}")]
    Prediction(String),
}

impl EvaluationError {
    /// Short label used for metrics and API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            EvaluationError::ModelUnavailable => "model_unavailable",
            EvaluationError::SchemaMismatch { .. } => "schema_mismatch",
            EvaluationError::InvalidProfile { .. } => "invalid_profile",
            EvaluationError::Prediction(_) => "prediction_failed",
        }
    }
}

pub type Result<T> = std::result::Result<T, EvaluationError>;
