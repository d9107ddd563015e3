//! Risk model adapter and artifact loading.

pub mod adapter;
pub mod loader;
pub mod logistic;
pub mod model;

pub use adapter::{ModelStatus, RiskModelAdapter};
pub use loader::{load_model, load_or_degrade, ModelLoadError};
pub use logistic::{LogisticArtifact, LogisticModel};
pub use model::RiskModel;
