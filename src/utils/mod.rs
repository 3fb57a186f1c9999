//! Utility functions and helpers.
//!
//! This module contains the size formatting helpers and the path inspection
//! helpers used by the calculator.

pub mod path;
pub mod size;

pub use path::{has_hidden_segment, is_hidden_name};
pub use size::{
    build_output, default_format, format_size, human_format, human_format_with, render_line,
};
