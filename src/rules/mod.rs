//! Deterministic policy cutoffs.

pub mod gate;

pub use gate::{GateOutcome, RuleGate};
