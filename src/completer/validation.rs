//! Column name checks that run while a completer is built
//!
//! Boundary spaces in column names are hard to spot by eye, and a missing
//! space filler silently hides columns. Both conditions are reported as
//! [`CompleterWarning`]s; the configured [`WarningPolicy`] decides whether a
//! warning aborts construction or is only logged.

use crate::config::WarningPolicy;
use crate::constants::SPACE;
use crate::models::ColumnLabel;
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Conditions worth flagging about a table's column names
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompleterWarning {
    /// Some column names begin with a space
    #[error(
        "Each of the following columns starts with one or more spaces: {}",
        QuotedList(.columns)
    )]
    LeadingSpaces { columns: Vec<String> },

    /// Some column names end with a space
    #[error(
        "Each of the following columns ends with one or more spaces: {}",
        QuotedList(.columns)
    )]
    TrailingSpaces { columns: Vec<String> },

    /// Without a filler, names containing spaces were left out of the mapping
    #[error(
        "Without a space filler specified, you're only able to autocomplete {accessible} of {total} column names"
    )]
    PartialCoverage { accessible: usize, total: usize },
}

struct QuotedList<'a>(&'a [String]);

impl fmt::Display for QuotedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{}'", name)?;
        }
        Ok(())
    }
}

/// Find textual labels with leading or trailing spaces
///
/// Leading spaces are reported before trailing ones. Returns an empty list
/// when no label has boundary spaces.
pub fn edge_space_warnings(labels: &[ColumnLabel]) -> Vec<CompleterWarning> {
    let texts: Vec<&str> = labels.iter().filter_map(ColumnLabel::as_text).collect();

    let leading: Vec<String> = texts
        .iter()
        .filter(|name| name.starts_with(SPACE))
        .map(|name| name.to_string())
        .collect();

    let trailing: Vec<String> = texts
        .iter()
        .filter(|name| name.ends_with(SPACE))
        .map(|name| name.to_string())
        .collect();

    let mut warnings = Vec::new();
    if !leading.is_empty() {
        warnings.push(CompleterWarning::LeadingSpaces { columns: leading });
    }
    if !trailing.is_empty() {
        warnings.push(CompleterWarning::TrailingSpaces { columns: trailing });
    }
    warnings
}

/// Report the mapping as partial when it exposes fewer names than columns
pub fn coverage_warning(accessible: usize, total: usize) -> Option<CompleterWarning> {
    (accessible < total).then_some(CompleterWarning::PartialCoverage { accessible, total })
}

/// Apply the warning policy to a batch of warnings
///
/// Under [`WarningPolicy::Strict`] the first warning becomes the error.
/// Under [`WarningPolicy::Lenient`] every warning is logged and appended to
/// `sink`.
pub fn surface(
    warnings: Vec<CompleterWarning>,
    policy: WarningPolicy,
    sink: &mut Vec<CompleterWarning>,
) -> Result<()> {
    match policy {
        WarningPolicy::Strict => match warnings.into_iter().next() {
            Some(first) => Err(Error::Warning(first)),
            None => Ok(()),
        },
        WarningPolicy::Lenient => {
            for warning in warnings {
                warn!("{}", warning);
                sink.push(warning);
            }
            Ok(())
        }
    }
}
