//! Test utilities for the column completer
//!
//! Shared fixtures used across the mapping, resolver, validation and rename
//! test modules.

use polars::prelude::*;

use crate::models::ColumnLabel;

mod validation_tests;

/// Helper to build textual labels
pub fn labels(names: &[&str]) -> Vec<ColumnLabel> {
    names.iter().map(|name| ColumnLabel::from(*name)).collect()
}

/// Helper to create an 8x3 integer DataFrame with the given column names
pub fn create_test_frame(names: [&str; 3]) -> DataFrame {
    DataFrame::new(vec![
        Column::new(names[0].into(), (0..8).collect::<Vec<i32>>()),
        Column::new(names[1].into(), (8..16).collect::<Vec<i32>>()),
        Column::new(names[2].into(), (16..24).collect::<Vec<i32>>()),
    ])
    .unwrap()
}

/// Helper to collect a DataFrame's column names
pub fn column_names(frame: &DataFrame) -> Vec<String> {
    frame
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}
