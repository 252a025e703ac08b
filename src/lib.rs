//! Column Completer Library
//!
//! Exposes the column names of a tabular dataset as identifier-safe accessor
//! names while keeping a reverse mapping back to the original labels.
//!
//! This library provides tools for:
//! - Building a deterministic accessor-name to column-label mapping with
//!   collision detection
//! - Resolving accessor names back to the original labels for indexing
//! - Listing the accessible names for completion tooling
//! - Renaming a DataFrame's columns in bulk without mutating the input
//!
//! ```rust
//! use column_completer::ColumnCompleter;
//! use polars::prelude::*;
//!
//! # fn main() -> column_completer::Result<()> {
//! let df = df!("Col A" => [1, 2], "Col B" => [3, 4])?;
//! let cols = ColumnCompleter::new(&df)?;
//!
//! assert_eq!(cols.get("Col_A")?.to_string(), "Col A");
//! assert_eq!(cols.available_names(), vec!["Col_A", "Col_B"]);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod models;

// Core mapping and renaming logic
pub mod completer;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use completer::ColumnCompleter;
pub use completer::mapping::ColumnMapping;
pub use completer::rename::{rename_columns, rename_columns_with, renamed_labels};
pub use completer::validation::CompleterWarning;
pub use config::{CompleterConfig, RenameOptions, WarningPolicy};
pub use models::{ColumnLabel, ColumnSource, LabelKind, PositionalColumns};

/// Result type alias for column completer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for mapping construction, lookup and renaming
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Two column labels sanitize to the same accessor name
    #[error(
        "Using '{filler}' as a replacement for spaces causes a collision of column names, please choose another"
    )]
    FillerCollision { filler: String },

    /// A warning raised as an error under the strict warning policy
    #[error(transparent)]
    Warning(#[from] CompleterWarning),

    /// No column is accessible under the requested name
    #[error("No column is accessible as '{key}'")]
    UnknownColumn { key: String },

    /// Bulk rename would produce duplicate column names
    #[error(
        "Renaming the columns in such a way would cause a collision of column names: {}",
        .duplicates.join(", ")
    )]
    RenameCollision { duplicates: Vec<String> },

    /// Table library error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a filler collision error
    pub fn filler_collision(filler: impl Into<String>) -> Self {
        Self::FillerCollision {
            filler: filler.into(),
        }
    }

    /// Create an unknown column error
    pub fn unknown_column(key: impl Into<String>) -> Self {
        Self::UnknownColumn { key: key.into() }
    }

    /// Create a rename collision error
    pub fn rename_collision(duplicates: Vec<String>) -> Self {
        Self::RenameCollision { duplicates }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when this error is a warning that the strict policy upgraded
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Warning(_))
    }
}
