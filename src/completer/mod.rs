//! Attribute-style access to a table's column names
//!
//! A [`ColumnCompleter`] snapshots a table's column labels and exposes them
//! under identifier-safe accessor names, resolving each name back to the
//! original label for indexing into the table.
//!
//! ## Architecture
//!
//! - [`mapping`] - Accessor name derivation and collision detection
//! - [`validation`] - Edge-space and coverage warnings, warning policy
//! - [`rename`] - Bulk renaming of a DataFrame's columns
//!
//! ## Usage
//!
//! ```rust
//! use column_completer::{ColumnCompleter, CompleterConfig};
//! use polars::prelude::*;
//!
//! # fn main() -> column_completer::Result<()> {
//! let df = df!("Max Temp" => [21.5], "Min Temp" => [9.0])?;
//! let cols = ColumnCompleter::with_config(&df, CompleterConfig::default().with_space_filler("__"))?;
//!
//! let max_temp = cols.column(&df, "Max__Temp")?;
//! assert_eq!(max_temp.name().as_str(), "Max Temp");
//! # Ok(())
//! # }
//! ```

pub mod mapping;
pub mod rename;
pub mod validation;

#[cfg(test)]
pub mod tests;

use crate::config::CompleterConfig;
use crate::models::{ColumnLabel, ColumnSource, LabelKind};
use crate::{Error, Result};
use mapping::ColumnMapping;
use polars::prelude::{Column, DataFrame};
use std::ops::Index;
use tracing::debug;
use validation::CompleterWarning;

/// Column names of a table exposed as accessor names
#[derive(Debug, Clone)]
pub struct ColumnCompleter {
    columns: Vec<ColumnLabel>,
    config: CompleterConfig,
    mapping: ColumnMapping,
    warnings: Vec<CompleterWarning>,
}

impl ColumnCompleter {
    /// Build a completer with the default configuration
    ///
    /// Spaces are replaced by `_` and warnings abort construction.
    pub fn new<S>(table: &S) -> Result<Self>
    where
        S: ColumnSource + ?Sized,
    {
        Self::with_config(table, CompleterConfig::default())
    }

    /// Build a completer with a custom configuration
    pub fn with_config<S>(table: &S, config: CompleterConfig) -> Result<Self>
    where
        S: ColumnSource + ?Sized,
    {
        let columns = table.column_labels();
        let kind = LabelKind::classify(&columns);
        let mut warnings = Vec::new();

        if !config.silence_warnings && kind == LabelKind::AllStringLabels {
            validation::surface(
                validation::edge_space_warnings(&columns),
                config.warning_policy,
                &mut warnings,
            )?;
        }

        let mapping = ColumnMapping::build(&columns, config.filler())?;

        if !config.silence_warnings {
            validation::surface(
                validation::coverage_warning(mapping.len(), columns.len())
                    .into_iter()
                    .collect(),
                config.warning_policy,
                &mut warnings,
            )?;
        }

        debug!(
            "Column completer ready: {} accessible names, {} warnings",
            mapping.len(),
            warnings.len()
        );

        Ok(Self {
            columns,
            config,
            mapping,
            warnings,
        })
    }

    /// Resolve an accessor name to the original column label
    pub fn get(&self, key: &str) -> Result<&ColumnLabel> {
        self.mapping
            .get(key)
            .ok_or_else(|| Error::unknown_column(key))
    }

    /// Accessor names available for completion, in column order
    pub fn available_names(&self) -> Vec<&str> {
        self.mapping.keys().collect()
    }

    /// Accessor names starting with `prefix`, in column order
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        self.mapping
            .keys()
            .filter(|key| key.starts_with(prefix))
            .collect()
    }

    /// Check if an accessor name resolves to a column
    pub fn contains(&self, key: &str) -> bool {
        self.mapping.contains_key(key)
    }

    /// Resolve an accessor name and fetch the matching column from `frame`
    ///
    /// Textual labels are looked up by name, integer labels by position.
    pub fn column<'a>(&self, frame: &'a DataFrame, key: &str) -> Result<&'a Column> {
        match self.get(key)? {
            ColumnLabel::Text(name) => Ok(frame.column(name)?),
            ColumnLabel::Integer(position) => usize::try_from(*position)
                .ok()
                .and_then(|index| frame.select_at_idx(index))
                .ok_or_else(|| Error::unknown_column(key)),
        }
    }

    /// The column labels captured at construction
    pub fn columns(&self) -> &[ColumnLabel] {
        &self.columns
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn config(&self) -> &CompleterConfig {
        &self.config
    }

    pub fn space_filler(&self) -> Option<&str> {
        self.config.filler()
    }

    pub fn silence_warnings(&self) -> bool {
        self.config.silence_warnings
    }

    /// Warnings recorded under the lenient policy
    pub fn warnings(&self) -> &[CompleterWarning] {
        &self.warnings
    }
}

impl Index<&str> for ColumnCompleter {
    type Output = ColumnLabel;

    /// # Panics
    ///
    /// Panics if no column is accessible under `key`.
    fn index(&self, key: &str) -> &ColumnLabel {
        match self.mapping.get(key) {
            Some(label) => label,
            None => panic!("No column is accessible as '{}'", key),
        }
    }
}
