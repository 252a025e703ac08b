//! Integration tests for the column completer public API
//!
//! These tests drive the library the way an interactive session would: build
//! a DataFrame, wrap its columns, and index back into the frame through the
//! accessor names.

use column_completer::{
    ColumnCompleter, ColumnLabel, CompleterConfig, Error, PositionalColumns, WarningPolicy,
    rename_columns,
};
use polars::prelude::*;

fn observations() -> DataFrame {
    df!(
        "Station Id" => [1001, 1002, 1003],
        "Max Air Temp" => [15.5, 12.1, 9.8],
        "Min Air Temp" => [8.2, 4.8, 2.3],
        "Rainfall" => [0.0, 1.2, 3.4]
    )
    .unwrap()
}

fn names(frame: &DataFrame) -> Vec<String> {
    frame
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

/// Purpose: accessor names index back into the frame they were built from
#[test]
fn test_accessors_index_into_frame() {
    let df = observations();
    let cols = ColumnCompleter::new(&df).unwrap();

    assert_eq!(
        cols.available_names(),
        vec!["Station_Id", "Max_Air_Temp", "Min_Air_Temp", "Rainfall"]
    );

    let label = cols.get("Max_Air_Temp").unwrap();
    let column = df.column(label.as_text().unwrap()).unwrap();
    assert_eq!(
        column.as_materialized_series().f64().unwrap().get(0),
        Some(15.5)
    );

    let rainfall = cols.column(&df, "Rainfall").unwrap();
    assert_eq!(
        rainfall.as_materialized_series().f64().unwrap().get(2),
        Some(3.4)
    );
}

/// Purpose: every label without spaces is reachable under its own name
#[test]
fn test_labels_without_spaces_resolve_to_themselves() {
    let df = df!("a" => [1], "b" => [2], "c_d" => [3]).unwrap();
    let cols = ColumnCompleter::new(&df).unwrap();

    for name in ["a", "b", "c_d"] {
        assert_eq!(cols.get(name).unwrap(), name);
    }
}

/// Purpose: the documented failure messages reach the caller unchanged
#[test]
fn test_construction_failures() {
    let collision = df!("Col A" => [1], "Col_A" => [2], "Col B" => [3]).unwrap();
    let err = ColumnCompleter::new(&collision).unwrap_err();
    assert!(err.to_string().contains("spaces causes a collision of column names"));

    let trailing = df!("Col A " => [1], "Col B" => [2], "Col C" => [3]).unwrap();
    let err = ColumnCompleter::new(&trailing).unwrap_err();
    assert!(err.to_string().contains("ends with one or more spaces"));

    let leading = df!("Col A" => [1], " Col B" => [2], "Col C" => [3]).unwrap();
    let err = ColumnCompleter::new(&leading).unwrap_err();
    assert!(err.to_string().contains("starts with one or more spaces"));
}

/// Purpose: the lenient policy keeps going and exposes what it found
#[test]
fn test_lenient_policy() {
    let df = df!("Col A " => [1], "Col B" => [2]).unwrap();
    let config = CompleterConfig::default().with_warning_policy(WarningPolicy::Lenient);
    let cols = ColumnCompleter::with_config(&df, config).unwrap();

    assert_eq!(cols.available_names(), vec!["Col_A_", "Col_B"]);
    assert_eq!(cols.warnings().len(), 1);
}

/// Purpose: headerless data is addressed by position without warnings
#[test]
fn test_numeric_column_labels() {
    let df = observations();
    let cols = ColumnCompleter::new(&PositionalColumns::new(&df)).unwrap();

    assert!(cols.warnings().is_empty());
    assert_eq!(cols.get("3").unwrap(), &ColumnLabel::Integer(3));
    assert_eq!(cols.column(&df, "0").unwrap().name().as_str(), "Station Id");
    assert!(matches!(cols.get("4"), Err(Error::UnknownColumn { .. })));
}

/// Purpose: renaming returns a new frame and leaves the original alone
#[test]
fn test_rename_columns() {
    let df = df!("col a" => [1], "col b" => [2], "col c" => [3]).unwrap();

    let renamed = rename_columns(&df, "_", false).unwrap();
    assert_eq!(names(&renamed), vec!["col_a", "col_b", "col_c"]);

    let capitalized = rename_columns(&df, "_", true).unwrap();
    assert_eq!(names(&capitalized), vec!["Col_a", "Col_b", "Col_c"]);

    assert_eq!(names(&df), vec!["col a", "col b", "col c"]);

    let clashing = df!("col a" => [1], "col_a" => [2], "col c" => [3]).unwrap();
    assert!(matches!(
        rename_columns(&clashing, "_", false),
        Err(Error::RenameCollision { .. })
    ));
    assert_eq!(names(&clashing), vec!["col a", "col_a", "col c"]);
}

/// Purpose: a renamed frame produces accessors identical to its column names
#[test]
fn test_renamed_frame_needs_no_mapping() {
    let df = observations();
    let renamed = rename_columns(&df, "_", false).unwrap();
    let cols = ColumnCompleter::new(&renamed).unwrap();

    for (key, label) in cols.mapping().iter() {
        assert_eq!(label, key);
    }
}
