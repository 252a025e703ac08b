//! Application constants for the column completer
//!
//! Default values and fixed strings shared by the library and the CLI.

// =============================================================================
// Sanitization
// =============================================================================

/// Character rewritten when deriving accessor names from column labels
pub const SPACE: char = ' ';

/// Default string substituted for spaces in accessor names
pub const DEFAULT_SPACE_FILLER: &str = "_";

/// Default string substituted for spaces by the bulk renamer
pub const DEFAULT_RENAME_REPLACEMENT: &str = "_";

/// Prepended to an integer label's key while a text label already owns it
pub const SHADOWED_INTEGER_PREFIX: char = '_';

/// Pattern an accessor name must match to be usable as a plain identifier
pub const IDENTIFIER_PATTERN: &str = r"^[A-Za-z_][A-Za-z0-9_]*$";

// =============================================================================
// CLI Defaults
// =============================================================================

/// Crate name used as the default tracing filter target
pub const LOG_TARGET: &str = "column_completer";

/// Default logging level when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
