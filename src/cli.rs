//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library, and turns them into the option
//! structs consumed by the library.

use std::path::{Path, PathBuf};

use clap::Parser;

use path_size::config::{OutputOptions, ScanOptions, SizeBase};

/// Command-line arguments controlling which entries are counted.
#[derive(Parser, Debug)]
struct TraversalArgs {
    /// Descend into subdirectories
    ///
    /// Without this flag only the files directly inside the given directory
    /// are counted. Symbolic links are followed either way.
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Include hidden files and directories
    ///
    /// Names starting with `.` are skipped by default, and a path with a
    /// hidden segment anywhere in it measures as zero.
    #[arg(short = 'a', long)]
    all: bool,

    /// Entry names to skip during traversal
    ///
    /// Can be specified multiple times, e.g. `--exclude .DS_Store`.
    #[arg(long, value_name = "NAME", action = clap::ArgAction::Append)]
    exclude: Vec<String>,
}

/// Command-line arguments controlling how the size is printed.
#[derive(Parser, Debug)]
struct FormatArgs {
    /// Print sizes in human-readable format (e.g. 1.5KB, 976.6KB)
    #[arg(short = 'H', long)]
    human: bool,

    /// Scale human-readable sizes by powers of 1000 instead of 1024
    #[arg(long)]
    si: bool,
}

/// Main command-line interface structure.
#[derive(Parser, Debug)]
#[command(name = "path-size")]
#[command(about = "Print the size of a file or directory")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// File or directory to measure
    path: PathBuf,

    /// Show skipped entries and per-directory totals on stderr
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Traversal options
    #[command(flatten)]
    traversal: TraversalArgs,

    /// Formatting options
    #[command(flatten)]
    format: FormatArgs,
}

impl Cli {
    /// The path to measure.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `--verbose` was passed.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Extract traversal options.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use clap::Parser;
    /// # mod cli { include!("cli.rs"); }
    /// # use cli::Cli;
    /// let args = Cli::parse_from(&["path-size", "-r", "-a", "dir"]);
    /// let options = args.scan_options();
    /// assert!(options.recursive);
    /// assert!(options.include_hidden);
    /// ```
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions::new(self.traversal.all, self.traversal.recursive)
            .with_exclude(self.traversal.exclude.iter().cloned())
    }

    /// Extract output options.
    #[must_use]
    pub const fn output_options(&self) -> OutputOptions {
        let base = if self.format.si {
            SizeBase::Decimal
        } else {
            SizeBase::Binary
        };

        OutputOptions::new(self.format.human).with_base(base)
    }
}
