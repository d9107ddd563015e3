//! Capability interface for a pre-trained default-probability classifier.

use crate::error::Result;
use crate::features::FeatureVector;

/// Interface for a frozen, externally trained classifier.
pub trait RiskModel: Send + Sync {
    /// Probability of the positive ("not fully paid") class, in [0, 1].
    fn predict(&self, features: &FeatureVector) -> Result<f64>;

    /// Model name/type
    fn name(&self) -> &str;

    /// Model version/id
    fn version(&self) -> &str;
}
