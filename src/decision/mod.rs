//! Decision aggregation.

pub mod aggregator;

pub use aggregator::DecisionAggregator;
