//! Configuration management for mapping construction and renaming.
//!
//! Provides the options a [`ColumnCompleter`](crate::ColumnCompleter) is built
//! with and the options of the bulk renamer.

use crate::constants::{DEFAULT_RENAME_REPLACEMENT, DEFAULT_SPACE_FILLER};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How warnings found while building a completer are surfaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningPolicy {
    /// Abort construction with [`Error::Warning`]
    #[default]
    Strict,
    /// Log the warning, record it on the completer and continue
    Lenient,
}

impl FromStr for WarningPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(Error::configuration(format!(
                "Unknown warning policy '{}' (expected 'strict' or 'lenient')",
                other
            ))),
        }
    }
}

impl fmt::Display for WarningPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Lenient => write!(f, "lenient"),
        }
    }
}

/// Options for building a [`ColumnCompleter`](crate::ColumnCompleter)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompleterConfig {
    /// String substituted for spaces; `None` drops labels containing spaces
    pub space_filler: Option<String>,

    /// Skip the edge-space and partial-coverage checks entirely
    pub silence_warnings: bool,

    /// What to do with warnings when they are not silenced
    pub warning_policy: WarningPolicy,
}

impl Default for CompleterConfig {
    fn default() -> Self {
        Self {
            space_filler: Some(DEFAULT_SPACE_FILLER.to_string()),
            silence_warnings: false,
            warning_policy: WarningPolicy::Strict,
        }
    }
}

impl CompleterConfig {
    /// Use a custom space filler
    pub fn with_space_filler(mut self, filler: impl Into<String>) -> Self {
        self.space_filler = Some(filler.into());
        self
    }

    /// Leave the filler unset so labels containing spaces are not exposed
    pub fn without_space_filler(mut self) -> Self {
        self.space_filler = None;
        self
    }

    /// Disable the edge-space and partial-coverage warnings
    pub fn with_silenced_warnings(mut self) -> Self {
        self.silence_warnings = true;
        self
    }

    /// Choose how unsilenced warnings are surfaced
    pub fn with_warning_policy(mut self, policy: WarningPolicy) -> Self {
        self.warning_policy = policy;
        self
    }

    /// The configured filler as a borrowed string
    pub fn filler(&self) -> Option<&str> {
        self.space_filler.as_deref()
    }
}

/// Options for [`rename_columns`](crate::rename_columns)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameOptions {
    /// String substituted for spaces in the new column names
    pub replacement: String,

    /// Uppercase the first character of every renamed column
    pub capitalize_first: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            replacement: DEFAULT_RENAME_REPLACEMENT.to_string(),
            capitalize_first: false,
        }
    }
}

impl RenameOptions {
    /// Create rename options with a custom replacement
    pub fn new(replacement: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            ..Default::default()
        }
    }

    /// Uppercase the first character of every renamed column
    pub fn with_capitalized_first(mut self) -> Self {
        self.capitalize_first = true;
        self
    }
}
