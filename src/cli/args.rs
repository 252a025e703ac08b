//! Command-line argument definitions for the column completer
//!
//! This module defines the CLI interface using clap derive API. Every
//! subcommand reads a CSV file and works on its column names.

use crate::config::{CompleterConfig, RenameOptions, WarningPolicy};
use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_RENAME_REPLACEMENT, DEFAULT_SPACE_FILLER};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the column completer
///
/// Shows how a table's column names map to identifier-safe accessor names,
/// resolves accessor names back, and renames columns in bulk.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "column-completer",
    version,
    about = "Map DataFrame column names to identifier-safe accessor names",
    long_about = "Reads the column names of a CSV file and shows them as identifier-safe accessor \
                  names, with spaces replaced by a filler string. Accessor names can be resolved \
                  back to the original column names, and a file's columns can be renamed in bulk."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the accessor names of a CSV file's columns
    Inspect(InspectArgs),
    /// Resolve accessor names back to the original column names
    Lookup(LookupArgs),
    /// Replace spaces in a CSV file's column names
    Rename(RenameArgs),
}

impl Commands {
    /// Logging options of whichever subcommand was chosen
    pub fn log_options(&self) -> &LogOptions {
        match self {
            Commands::Inspect(args) => &args.log,
            Commands::Lookup(args) => &args.log,
            Commands::Rename(args) => &args.log,
        }
    }
}

/// Options controlling how accessor names are built
#[derive(Debug, Clone, Parser)]
pub struct CompleterOptions {
    /// String substituted for spaces in accessor names
    #[arg(
        short = 'f',
        long = "filler",
        value_name = "STRING",
        default_value = DEFAULT_SPACE_FILLER,
        help = "String substituted for spaces in accessor names"
    )]
    pub filler: String,

    /// Do not substitute spaces; columns containing spaces get no accessor
    #[arg(
        long = "no-filler",
        conflicts_with = "filler",
        help = "Leave out columns whose names contain spaces"
    )]
    pub no_filler: bool,

    /// Skip the checks for boundary spaces and partial coverage
    #[arg(long = "silence-warnings", help = "Skip column name warnings")]
    pub silence_warnings: bool,

    /// Whether warnings abort (strict) or are only reported (lenient)
    #[arg(
        short = 'w',
        long = "warnings",
        value_name = "POLICY",
        default_value = "strict",
        help = "Warning policy: strict or lenient"
    )]
    pub warning_policy: WarningPolicy,

    /// Treat the file as headerless and address columns by position
    #[arg(long = "positional", help = "Address columns by position (headerless file)")]
    pub positional: bool,
}

impl CompleterOptions {
    /// Build the completer configuration these options describe
    pub fn to_config(&self) -> CompleterConfig {
        let config = CompleterConfig::default().with_warning_policy(self.warning_policy);

        let config = if self.no_filler {
            config.without_space_filler()
        } else {
            config.with_space_filler(self.filler.clone())
        };

        if self.silence_warnings {
            config.with_silenced_warnings()
        } else {
            config
        }
    }
}

impl Default for CompleterOptions {
    fn default() -> Self {
        Self {
            filler: DEFAULT_SPACE_FILLER.to_string(),
            no_filler: false,
            silence_warnings: false,
            warning_policy: WarningPolicy::Strict,
            positional: false,
        }
    }
}

/// Logging verbosity options shared by every subcommand
#[derive(Debug, Clone, Default, Parser)]
pub struct LogOptions {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(short = 'q', long = "quiet", help = "Only show errors")]
    pub quiet: bool,
}

impl LogOptions {
    /// Get the tracing level implied by the flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// CSV file whose columns to inspect
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    #[command(flatten)]
    pub completer: CompleterOptions,

    /// Output format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the accessor listing"
    )]
    pub output_format: OutputFormat,

    #[command(flatten)]
    pub log: LogOptions,
}

/// Arguments for the lookup command
#[derive(Debug, Clone, Parser)]
pub struct LookupArgs {
    /// CSV file whose columns to resolve against
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Accessor names to resolve
    #[arg(value_name = "NAME", required = true, num_args = 1..)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub completer: CompleterOptions,

    #[command(flatten)]
    pub log: LogOptions,
}

/// Arguments for the rename command
#[derive(Debug, Clone, Parser)]
pub struct RenameArgs {
    /// CSV file whose columns to rename
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// String substituted for spaces in the new column names
    #[arg(
        short = 'r',
        long = "replacement",
        value_name = "STRING",
        default_value = DEFAULT_RENAME_REPLACEMENT,
        help = "String substituted for spaces"
    )]
    pub replacement: String,

    /// Uppercase the first character of every renamed column
    #[arg(long = "capitalize-first", help = "Uppercase the first character of each name")]
    pub capitalize_first: bool,

    /// Where to write the renamed CSV; prints the new header if omitted
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Write the renamed CSV to this path"
    )]
    pub output_path: Option<PathBuf>,

    #[command(flatten)]
    pub log: LogOptions,
}

impl RenameArgs {
    /// Rename options these arguments describe
    pub fn to_options(&self) -> RenameOptions {
        let options = RenameOptions::new(self.replacement.clone());
        if self.capitalize_first {
            options.with_capitalized_first()
        } else {
            options
        }
    }
}

/// Output format options for the inspect command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}
