//! Bulk renaming of a DataFrame's columns
//!
//! Applies the same space replacement as the accessor mapping, but to the
//! table itself, returning a new DataFrame with identifier-friendly names.

use super::mapping::sanitize;
use crate::config::RenameOptions;
use crate::{Error, Result};
use polars::prelude::DataFrame;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Return a copy of `table` with spaces in its column names replaced
///
/// Fails with [`Error::RenameCollision`] before touching anything if the
/// replacement would make two column names identical. When
/// `capitalize_first` is set, the first character of every new name is
/// uppercased after that check.
pub fn rename_columns(
    table: &DataFrame,
    replacement: &str,
    capitalize_first: bool,
) -> Result<DataFrame> {
    let labels: Vec<String> = table
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    let renamed = renamed_labels(&labels, replacement, capitalize_first)?;

    let mut frame = table.clone();
    frame.set_column_names(renamed.iter().map(String::as_str))?;

    debug!(
        "Renamed {} columns (replacement: {:?}, capitalize_first: {})",
        renamed.len(),
        replacement,
        capitalize_first
    );

    Ok(frame)
}

/// [`rename_columns`] driven by [`RenameOptions`]
pub fn rename_columns_with(table: &DataFrame, options: &RenameOptions) -> Result<DataFrame> {
    rename_columns(table, &options.replacement, options.capitalize_first)
}

/// Compute the renamed labels without touching any table
pub fn renamed_labels(
    labels: &[String],
    replacement: &str,
    capitalize_first: bool,
) -> Result<Vec<String>> {
    let candidates: Vec<String> = labels
        .iter()
        .map(|label| sanitize(label, replacement))
        .collect();

    let unique_labels: HashSet<&str> = labels.iter().map(String::as_str).collect();
    let unique_candidates: HashSet<&str> = candidates.iter().map(String::as_str).collect();

    if unique_candidates.len() < unique_labels.len() {
        return Err(Error::rename_collision(colliding_names(labels, &candidates)));
    }

    if !capitalize_first {
        return Ok(candidates);
    }

    Ok(candidates.iter().map(|name| capitalize(name)).collect())
}

/// Renamed names produced by more than one distinct original label
fn colliding_names(labels: &[String], candidates: &[String]) -> Vec<String> {
    let mut sources: HashMap<&str, HashSet<&str>> = HashMap::new();
    for (label, candidate) in labels.iter().zip(candidates) {
        sources
            .entry(candidate.as_str())
            .or_default()
            .insert(label.as_str());
    }

    let mut seen = HashSet::new();
    candidates
        .iter()
        .filter(|candidate| sources[candidate.as_str()].len() > 1)
        .filter(|candidate| seen.insert(candidate.as_str()))
        .cloned()
        .collect()
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
