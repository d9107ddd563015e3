//! Unit tests for the feature vector builder

use std::collections::HashMap;

use creditgate::error::EvaluationError;
use creditgate::features::{BaseFill, FeatureSchema, FeatureVectorBuilder, FILLER_VALUES};

use crate::common_stub::{profile, training_columns, training_schema};

#[test]
fn test_vector_follows_schema_order() {
    let schema = training_schema();
    let vector = FeatureVectorBuilder::default()
        .build(&schema, &profile(700, 15.0))
        .unwrap();

    assert_eq!(vector.columns(), training_columns().as_slice());
    assert_eq!(vector.len(), schema.len());
}

#[test]
fn test_live_fields_are_written() {
    let vector = FeatureVectorBuilder::default()
        .build(&training_schema(), &profile(712, 18.5))
        .unwrap();

    assert_eq!(vector.get("fico"), Some(712.0));
    assert_eq!(vector.get("dti"), Some(18.5));
    assert_eq!(vector.get("int.rate"), Some(0.12));
    assert_eq!(vector.get("log.annual.inc"), Some(10.5));
}

#[test]
fn test_fillers_are_applied() {
    let vector = FeatureVectorBuilder::default()
        .build(&training_schema(), &profile(700, 15.0))
        .unwrap();

    for (column, value) in FILLER_VALUES {
        assert_eq!(vector.get(column), Some(value), "filler {}", column);
    }
    assert_eq!(vector.get("credit.policy"), Some(1.0));
    assert_eq!(vector.get("days.with.cr.line"), Some(4000.0));
}

#[test]
fn test_unset_columns_are_zero_by_default() {
    let vector = FeatureVectorBuilder::new(BaseFill::Zeros)
        .build(&training_schema(), &profile(700, 15.0))
        .unwrap();

    assert_eq!(vector.get("inq.last.6mths"), Some(0.0));
    assert_eq!(vector.get("purpose_debt_consolidation"), Some(0.0));
}

#[test]
fn test_model_defaults_fill_unset_columns_only() {
    let mut defaults = HashMap::new();
    defaults.insert("inq.last.6mths".to_string(), 1.5);
    defaults.insert("fico".to_string(), 710.0);
    let schema = training_schema().with_defaults(defaults);

    let vector = FeatureVectorBuilder::new(BaseFill::ModelDefaults)
        .build(&schema, &profile(650, 15.0))
        .unwrap();

    assert_eq!(vector.get("inq.last.6mths"), Some(1.5));
    assert_eq!(vector.get("fico"), Some(650.0));
    assert_eq!(vector.get("purpose_debt_consolidation"), Some(0.0));
}

#[test]
fn test_fillers_missing_from_schema_are_skipped() {
    let schema = FeatureSchema::new(
        ["fico", "dti", "int.rate", "log.annual.inc"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    );
    let vector = FeatureVectorBuilder::default()
        .build(&schema, &profile(700, 15.0))
        .unwrap();

    assert_eq!(vector.len(), 4);
    assert!(vector.get("installment").is_none());
}

#[test]
fn test_missing_required_column_is_schema_mismatch() {
    let schema = FeatureSchema::new(vec![
        "fico".to_string(),
        "dti".to_string(),
        "installment".to_string(),
    ]);
    let err = FeatureVectorBuilder::default()
        .build(&schema, &profile(700, 15.0))
        .unwrap_err();

    match err {
        EvaluationError::SchemaMismatch { missing } => {
            assert_eq!(missing, vec!["int.rate".to_string(), "log.annual.inc".to_string()]);
        }
        other => panic!("expected SchemaMismatch, got {:?}", other),
    }
}

#[test]
fn test_base_fill_parses_from_config_strings() {
    assert_eq!("zeros".parse::<BaseFill>(), Ok(BaseFill::Zeros));
    assert_eq!("MODEL_DEFAULTS".parse::<BaseFill>(), Ok(BaseFill::ModelDefaults));
    assert!("median".parse::<BaseFill>().is_err());
}
