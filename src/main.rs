use clap::Parser;
use column_completer::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Column Completer - identifier-safe accessors for DataFrame columns");
    println!("==================================================================");
    println!();
    println!("Map the column names of a CSV file to accessor names with spaces");
    println!("replaced, resolve accessor names back, or rename columns in bulk.");
    println!();
    println!("USAGE:");
    println!("    column-completer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inspect     List the accessor names of a CSV file's columns");
    println!("    lookup      Resolve accessor names back to the original column names");
    println!("    rename      Replace spaces in a CSV file's column names");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Show accessor names, using '__' in place of spaces:");
    println!("    column-completer inspect observations.csv --filler __");
    println!();
    println!("    # Resolve accessor names:");
    println!("    column-completer lookup observations.csv Max_Temp Min_Temp");
    println!();
    println!("    # Write a copy with capitalized, underscore-separated column names:");
    println!("    column-completer rename observations.csv --capitalize-first -o renamed.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    column-completer <COMMAND> --help");
}
