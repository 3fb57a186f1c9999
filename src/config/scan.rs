//! Traversal configuration for size calculation.
//!
//! This module defines the options that control which entries are visited
//! and counted while a path is measured.

/// Configuration for directory traversal behavior.
///
/// The options are fixed for the duration of one calculation, including every
/// symbolic link target measured along the way.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Whether entries whose name starts with `.` are counted
    pub include_hidden: bool,

    /// Whether to descend into subdirectories
    pub recursive: bool,

    /// Entry names that are always skipped (e.g. `.DS_Store`)
    pub exclude: Vec<String>,
}

impl ScanOptions {
    /// Create options with the two traversal flags and no excluded names.
    #[must_use]
    pub const fn new(include_hidden: bool, recursive: bool) -> Self {
        Self {
            include_hidden,
            recursive,
            exclude: Vec::new(),
        }
    }

    /// Add entry names that should never be counted.
    #[must_use]
    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(names.into_iter().map(Into::into));
        self
    }

    /// Whether an entry with this name is on the exclusion list.
    #[must_use]
    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.iter().any(|excluded| excluded == name)
    }
}
