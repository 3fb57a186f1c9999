//! Configuration types for size calculation and output.
//!
//! All configuration comes from the command line; there is no configuration
//! file. The structs here are what the CLI layer hands to the library.

pub mod output;
pub mod scan;

pub use output::{OutputOptions, SizeBase};
pub use scan::ScanOptions;
