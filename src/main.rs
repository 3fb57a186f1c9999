//! # path-size
//!
//! A small CLI tool that prints the total size of a file or directory.
//!
//! The output is a single tab-separated line: the size, then the path.
//!
//! ## Usage
//!
//! ```bash
//! # Direct files of a directory, in bytes
//! path-size ./src
//!
//! # Whole tree, including hidden entries, human-readable
//! path-size -r -a -H ./src
//!
//! # Skip macOS metadata files and scale by powers of 1000
//! path-size -rH --si --exclude .DS_Store ~/Music
//! ```

mod cli;

use std::io::{self, Write};
use std::process::exit;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use log::{LevelFilter, debug};
use path_size::{Calculator, render_line};

use cli::Cli;

/// Entry point for the path-size application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("{} {err:#}", "Error:".red());

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, measures the requested path, and writes the output line
/// to stdout. Nothing is written to stdout when measuring fails.
///
/// # Errors
///
/// Returns errors from the size calculation or from writing to stdout.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    init_logger(args.verbose());

    let calculator = Calculator::new(args.scan_options());
    let path = args.path();

    debug!("Measuring {} with {:?}", path.display(), calculator.options());

    let bytes = calculator.measure(path)?;

    let line = render_line(bytes, path, &args.output_options());

    let mut stdout = io::stdout().lock();
    stdout.write_all(line.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Initialise the logger, honoring `RUST_LOG` when it is set.
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
