//! Service surface around the evaluator.

pub mod http;

pub use http::*;
