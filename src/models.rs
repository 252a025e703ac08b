//! Core data structures for column labels and the tables they come from.
//!
//! Defines the column label type, the one-off classification of a label
//! sequence, and the [`ColumnSource`] trait through which tables hand their
//! ordered labels to the completer.

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A column identifier as it appears in a table's column index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnLabel {
    /// Named column, the common case
    Text(String),
    /// Opaque positional or numeric identifier
    Integer(i64),
}

impl ColumnLabel {
    /// The label as a string slice, if it is textual
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(name) => Some(name),
            Self::Integer(_) => None,
        }
    }

    /// True for textual labels
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl fmt::Display for ColumnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(name) => f.write_str(name),
            Self::Integer(position) => write!(f, "{}", position),
        }
    }
}

impl From<&str> for ColumnLabel {
    fn from(name: &str) -> Self {
        Self::Text(name.to_string())
    }
}

impl From<String> for ColumnLabel {
    fn from(name: String) -> Self {
        Self::Text(name)
    }
}

impl From<&String> for ColumnLabel {
    fn from(name: &String) -> Self {
        Self::Text(name.clone())
    }
}

impl From<i64> for ColumnLabel {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl PartialEq<str> for ColumnLabel {
    fn eq(&self, other: &str) -> bool {
        self.as_text() == Some(other)
    }
}

impl PartialEq<&str> for ColumnLabel {
    fn eq(&self, other: &&str) -> bool {
        self.as_text() == Some(*other)
    }
}

/// Classification of a whole label sequence, made once before mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    /// Every label is textual (an empty sequence counts as textual)
    AllStringLabels,
    /// At least one label is not textual; labels are passed through as-is
    OpaqueLabels,
}

impl LabelKind {
    /// Classify a label sequence
    pub fn classify(labels: &[ColumnLabel]) -> Self {
        if labels.iter().all(ColumnLabel::is_text) {
            Self::AllStringLabels
        } else {
            Self::OpaqueLabels
        }
    }
}

/// Anything exposing an ordered collection of column labels
pub trait ColumnSource {
    /// Snapshot of the column labels in column order
    fn column_labels(&self) -> Vec<ColumnLabel>;
}

impl ColumnSource for DataFrame {
    fn column_labels(&self) -> Vec<ColumnLabel> {
        self.get_column_names()
            .into_iter()
            .map(|name| ColumnLabel::Text(name.to_string()))
            .collect()
    }
}

impl<T> ColumnSource for [T]
where
    T: Clone + Into<ColumnLabel>,
{
    fn column_labels(&self) -> Vec<ColumnLabel> {
        self.iter().cloned().map(Into::into).collect()
    }
}

impl<T, const N: usize> ColumnSource for [T; N]
where
    T: Clone + Into<ColumnLabel>,
{
    fn column_labels(&self) -> Vec<ColumnLabel> {
        self.as_slice().column_labels()
    }
}

impl<T> ColumnSource for Vec<T>
where
    T: Clone + Into<ColumnLabel>,
{
    fn column_labels(&self) -> Vec<ColumnLabel> {
        self.as_slice().column_labels()
    }
}

/// View of a DataFrame whose columns are addressed by position
///
/// Useful for headerless data, where the column names carry no meaning and
/// the integer positions are the labels.
#[derive(Debug, Clone, Copy)]
pub struct PositionalColumns<'a> {
    frame: &'a DataFrame,
}

impl<'a> PositionalColumns<'a> {
    pub fn new(frame: &'a DataFrame) -> Self {
        Self { frame }
    }
}

impl ColumnSource for PositionalColumns<'_> {
    fn column_labels(&self) -> Vec<ColumnLabel> {
        (0..self.frame.width())
            .map(|position| ColumnLabel::Integer(position as i64))
            .collect()
    }
}
