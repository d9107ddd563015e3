//! Feature vector construction for the risk model.

pub mod builder;

pub use builder::{
    BaseFill, FeatureSchema, FeatureVector, FeatureVectorBuilder, FILLER_VALUES, REQUIRED_COLUMNS,
};
