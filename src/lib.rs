//! # path-size
//!
//! Library behind the `path-size` command-line tool, which reports the total
//! size of a file or directory tree.
//!
//! The crate has two halves:
//!
//! - [`calculator`] walks a path and sums the byte length of what it finds,
//!   honoring the hidden-entry, recursion and exclusion options.
//! - [`utils::size`] renders a byte count as `1000000B` or `976.6KB` and
//!   composes the `<size>\t<path>` output line.
//!
//! ```no_run
//! # use std::path::Path;
//! # use path_size::{build_output, calculate_size};
//! let path = Path::new("src");
//! let bytes = calculate_size(path, false, true).unwrap();
//! print!("{}", build_output(bytes, path, true));
//! ```

pub mod calculator;
pub mod config;
pub mod error;
pub mod utils;

pub use calculator::{Calculator, calculate_size, get_path_size};
pub use config::{OutputOptions, ScanOptions, SizeBase};
pub use error::{SizeError, SizeResult};
pub use utils::{build_output, default_format, format_size, human_format, render_line};
