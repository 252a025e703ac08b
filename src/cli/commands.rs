//! Command implementations for the column completer CLI
//!
//! This module contains the command execution logic, report rendering and
//! logging setup for the CLI interface.

use crate::cli::args::{
    Args, Commands, CompleterOptions, InspectArgs, LogOptions, LookupArgs, OutputFormat,
    RenameArgs,
};
use crate::completer::ColumnCompleter;
use crate::completer::rename::rename_columns_with;
use crate::completer::validation::CompleterWarning;
use crate::constants::LOG_TARGET;
use crate::models::{ColumnLabel, PositionalColumns};
use anyhow::{Context, Result};
use colored::*;
use polars::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// One accessor name and the column it resolves to
#[derive(Debug, Clone, Serialize)]
pub struct AccessorEntry {
    pub name: String,
    pub column: ColumnLabel,
    pub identifier: bool,
}

/// Everything the inspect command reports about a file's columns
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub input: String,
    pub space_filler: Option<String>,
    pub total_columns: usize,
    pub accessors: Vec<AccessorEntry>,
    pub warnings: Vec<CompleterWarning>,
}

impl InspectReport {
    /// Collect the report from a built completer
    pub fn from_completer(input: &Path, completer: &ColumnCompleter) -> Self {
        let non_identifiers: HashSet<&str> =
            completer.mapping().non_identifier_keys().into_iter().collect();

        let accessors = completer
            .mapping()
            .iter()
            .map(|(name, column)| AccessorEntry {
                name: name.to_string(),
                column: column.clone(),
                identifier: !non_identifiers.contains(name),
            })
            .collect();

        Self {
            input: input.display().to_string(),
            space_filler: completer.space_filler().map(str::to_string),
            total_columns: completer.columns().len(),
            accessors,
            warnings: completer.warnings().to_vec(),
        }
    }
}

/// Main command runner
///
/// Sets up logging for the chosen subcommand and dispatches to it, writing
/// results to stdout.
pub fn run(args: Args) -> Result<()> {
    let Some(command) = args.command else {
        return Ok(());
    };

    setup_logging(command.log_options())?;
    debug!("Command line arguments: {:?}", command);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Inspect(args) => run_inspect(&args, &mut out),
        Commands::Lookup(args) => run_lookup(&args, &mut out),
        Commands::Rename(args) => run_rename(&args, &mut out),
    }
}

/// Set up structured logging based on CLI arguments
fn setup_logging(log: &LogOptions) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = log.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    if log.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialize logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// List the accessor names of a CSV file's columns
pub fn run_inspect(args: &InspectArgs, out: &mut impl Write) -> Result<()> {
    let completer = load_completer(&args.input, &args.completer)?;
    let report = InspectReport::from_completer(&args.input, &completer);

    info!(
        "Inspected {}: {} of {} columns accessible",
        report.input,
        report.accessors.len(),
        report.total_columns
    );

    match args.output_format {
        OutputFormat::Human => write_human_report(&report, out),
        OutputFormat::Json => write_json_report(&report, out),
        OutputFormat::Csv => write_csv_report(&report, out),
    }
}

/// Resolve accessor names back to the original column names, one per line
pub fn run_lookup(args: &LookupArgs, out: &mut impl Write) -> Result<()> {
    let completer = load_completer(&args.input, &args.completer)?;

    let labels = args
        .names
        .iter()
        .map(|name| completer.get(name))
        .collect::<crate::Result<Vec<_>>>()
        .with_context(|| format!("Lookup failed for {}", args.input.display()))?;

    for label in labels {
        writeln!(out, "{}", label)?;
    }
    Ok(())
}

/// Rename a CSV file's columns and write the result, or print the new header
pub fn run_rename(args: &RenameArgs, out: &mut impl Write) -> Result<()> {
    let frame = read_csv(&args.input, true, None)?;
    let mut renamed = rename_columns_with(&frame, &args.to_options())
        .with_context(|| format!("Cannot rename columns of {}", args.input.display()))?;

    match &args.output_path {
        Some(output_path) => {
            let mut file = File::create(output_path).with_context(|| {
                format!("Failed to create output file {}", output_path.display())
            })?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut renamed)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;

            info!(
                "Wrote {} rows with {} renamed columns to {}",
                renamed.height(),
                renamed.width(),
                output_path.display()
            );
        }
        None => {
            let header: Vec<String> = renamed
                .get_column_names()
                .into_iter()
                .map(|name| name.to_string())
                .collect();
            writeln!(out, "{}", header.join(","))?;
        }
    }
    Ok(())
}

/// Read a CSV file and build a completer over its columns
fn load_completer(path: &Path, options: &CompleterOptions) -> Result<ColumnCompleter> {
    let frame = read_csv(path, !options.positional, Some(1))?;
    let config = options.to_config();

    let completer = if options.positional {
        ColumnCompleter::with_config(&PositionalColumns::new(&frame), config)
    } else {
        ColumnCompleter::with_config(&frame, config)
    }
    .with_context(|| format!("Cannot build accessor names for {}", path.display()))?;

    Ok(completer)
}

fn read_csv(path: &Path, has_header: bool, n_rows: Option<usize>) -> Result<DataFrame> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let frame = CsvReadOptions::default()
        .with_has_header(has_header)
        .with_n_rows(n_rows)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .with_context(|| format!("Failed to read CSV file {}", path.display()))?;

    debug!("Read {} columns from {}", frame.width(), path.display());
    Ok(frame)
}

fn write_human_report(report: &InspectReport, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "Column accessors".bright_green().bold())?;
    writeln!(out, "{}", "================".bright_green())?;
    writeln!(out, "  {} {}", "File:".bright_cyan(), report.input)?;
    writeln!(
        out,
        "  {} {}",
        "Space filler:".bright_cyan(),
        report.space_filler.as_deref().unwrap_or("(none)")
    )?;
    writeln!(
        out,
        "  {} {} of {}",
        "Accessible:".bright_cyan(),
        report.accessors.len().to_string().bright_white().bold(),
        report.total_columns
    )?;
    writeln!(out)?;

    let width = report
        .accessors
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0);

    for entry in &report.accessors {
        let padding = " ".repeat(width - entry.name.chars().count());
        let marker = if entry.identifier {
            String::new()
        } else {
            format!("  {}", "(not an identifier)".bright_yellow())
        };
        writeln!(
            out,
            "  {}{} -> {}{}",
            entry.name.bright_white(),
            padding,
            format!("{:?}", entry.column.to_string()).bright_black(),
            marker
        )?;
    }

    if !report.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", "Warnings:".bright_yellow().bold())?;
        for warning in &report.warnings {
            writeln!(out, "  - {}", warning)?;
        }
    }
    Ok(())
}

fn write_json_report(report: &InspectReport, out: &mut impl Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

fn write_csv_report(report: &InspectReport, out: &mut impl Write) -> Result<()> {
    writeln!(out, "accessor,column,identifier")?;
    for entry in &report.accessors {
        writeln!(
            out,
            "{},{},{}",
            csv_field(&entry.name),
            csv_field(&entry.column.to_string()),
            entry.identifier
        )?;
    }
    Ok(())
}

/// Quote a field if it contains a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
