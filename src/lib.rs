//! Hybrid rule + model credit approval engine.

pub mod config;
pub mod core;
pub mod decision;
pub mod engine;
pub mod error;
pub mod features;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod risk;
pub mod rules;

pub use engine::CreditEvaluator;
pub use error::{EvaluationError, Result};
