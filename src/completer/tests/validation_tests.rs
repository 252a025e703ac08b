//! Tests for edge-space and coverage warnings under both policies

use super::{create_test_frame, labels};
use crate::Error;
use crate::completer::ColumnCompleter;
use crate::completer::validation::{CompleterWarning, coverage_warning, edge_space_warnings};
use crate::config::{CompleterConfig, WarningPolicy};
use crate::models::{ColumnLabel, PositionalColumns};

#[test]
fn test_trailing_space_aborts_construction() {
    let df = create_test_frame(["Col A ", "Col B", "Col C"]);
    let err = ColumnCompleter::new(&df).unwrap_err();

    assert!(err.is_warning());
    assert!(err.to_string().contains("ends with one or more spaces"));
    assert!(err.to_string().contains("'Col A '"));
}

#[test]
fn test_leading_space_aborts_construction() {
    let df = create_test_frame(["Col A", " Col B", "Col C"]);
    let err = ColumnCompleter::new(&df).unwrap_err();

    assert!(err.is_warning());
    assert!(err.to_string().contains("starts with one or more spaces"));
    assert!(err.to_string().contains("' Col B'"));
}

#[test]
fn test_leading_space_reported_before_trailing() {
    let df = create_test_frame(["Col A ", " Col B", "Col C"]);
    let err = ColumnCompleter::new(&df).unwrap_err();

    match err {
        Error::Warning(CompleterWarning::LeadingSpaces { columns }) => {
            assert_eq!(columns, vec![" Col B".to_string()]);
        }
        other => panic!("Expected LeadingSpaces warning, got {:?}", other),
    }
}

#[test]
fn test_edge_space_check_runs_before_collision_check() {
    let df = create_test_frame(["Col A ", "Col_A_", "Col C"]);
    let err = ColumnCompleter::new(&df).unwrap_err();
    assert!(err.is_warning());
}

#[test]
fn test_silenced_warnings_allow_edge_spaces() {
    let df = create_test_frame(["Col A ", " Col B", "Col C"]);
    let config = CompleterConfig::default().with_silenced_warnings();
    let cols = ColumnCompleter::with_config(&df, config).unwrap();

    assert_eq!(cols.available_names(), vec!["Col_A_", "_Col_B", "Col_C"]);
    assert!(cols.warnings().is_empty());
}

#[test]
fn test_silenced_warnings_do_not_hide_collisions() {
    let df = create_test_frame(["Col A", "Col_A", "Col B"]);
    let config = CompleterConfig::default().with_silenced_warnings();
    let err = ColumnCompleter::with_config(&df, config).unwrap_err();

    assert!(matches!(err, Error::FillerCollision { .. }));
}

#[test]
fn test_partial_coverage_aborts_construction() {
    let df = create_test_frame(["Col A", "ColB", "ColC"]);
    let config = CompleterConfig::default().without_space_filler();
    let err = ColumnCompleter::with_config(&df, config).unwrap_err();

    match &err {
        Error::Warning(CompleterWarning::PartialCoverage { accessible, total }) => {
            assert_eq!((*accessible, *total), (2, 3));
        }
        other => panic!("Expected PartialCoverage warning, got {:?}", other),
    }
    assert!(err.to_string().contains("2 of 3 column names"));
}

#[test]
fn test_partial_coverage_silenced() {
    let df = create_test_frame(["Col A", "ColB", "ColC"]);
    let config = CompleterConfig::default()
        .without_space_filler()
        .with_silenced_warnings();
    let cols = ColumnCompleter::with_config(&df, config).unwrap();

    assert_eq!(cols.available_names(), vec!["ColB", "ColC"]);
    assert!(cols.get("Col_A").is_err());
}

#[test]
fn test_lenient_policy_records_warnings() {
    let df = create_test_frame([" Col A", "Col B ", "ColC"]);
    let config = CompleterConfig::default()
        .without_space_filler()
        .with_warning_policy(WarningPolicy::Lenient);
    let cols = ColumnCompleter::with_config(&df, config).unwrap();

    assert_eq!(cols.available_names(), vec!["ColC"]);
    assert_eq!(
        cols.warnings(),
        &[
            CompleterWarning::LeadingSpaces {
                columns: vec![" Col A".to_string()]
            },
            CompleterWarning::TrailingSpaces {
                columns: vec!["Col B ".to_string()]
            },
            CompleterWarning::PartialCoverage {
                accessible: 1,
                total: 3
            },
        ]
    );
}

#[test]
fn test_lenient_policy_still_fails_on_collision() {
    let df = create_test_frame(["Col A", "Col_A", "Col B"]);
    let config = CompleterConfig::default().with_warning_policy(WarningPolicy::Lenient);
    let err = ColumnCompleter::with_config(&df, config).unwrap_err();

    assert!(matches!(err, Error::FillerCollision { .. }));
}

#[test]
fn test_integer_labels_raise_no_warnings() {
    let df = create_test_frame(["a", "b", "c"]);
    let cols = ColumnCompleter::new(&PositionalColumns::new(&df)).unwrap();

    assert!(cols.warnings().is_empty());
    assert_eq!(cols.available_names().len(), 3);
}

#[test]
fn test_mixed_labels_skip_edge_space_check() {
    let columns = vec![ColumnLabel::from(" padded "), ColumnLabel::from(1i64)];
    let cols = ColumnCompleter::new(&columns).unwrap();

    assert_eq!(cols.available_names(), vec![" padded ", "1"]);
}

#[test]
fn test_edge_space_warnings_helper() {
    assert!(edge_space_warnings(&labels(&["a", "b c"])).is_empty());

    let warnings = edge_space_warnings(&labels(&[" a", " b ", "c"]));
    assert_eq!(warnings.len(), 2);
    assert_eq!(
        warnings[1],
        CompleterWarning::TrailingSpaces {
            columns: vec![" b ".to_string()]
        }
    );
}

#[test]
fn test_coverage_warning_helper() {
    assert_eq!(coverage_warning(3, 3), None);
    assert_eq!(
        coverage_warning(1, 3),
        Some(CompleterWarning::PartialCoverage {
            accessible: 1,
            total: 3
        })
    );
}
