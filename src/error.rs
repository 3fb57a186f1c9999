//! Error types for size calculation.
//!
//! Every failure the calculator can report carries the path it was working on,
//! so the binary can print a useful message without extra context.

use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use thiserror::Error;

/// An error raised while measuring a path.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The path does not exist.
    #[error("no such file or directory: {}", path.display())]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The path exists but its metadata or contents cannot be read.
    #[error("permission denied: {}", path.display())]
    AccessDenied {
        /// The path that could not be inspected.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A symbolic link whose target cannot be resolved.
    #[error("broken symbolic link: {}: {source}", path.display())]
    BrokenSymlink {
        /// The link itself.
        path: PathBuf,
        /// The error returned while resolving the target.
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The path being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result alias used throughout the calculator.
pub type SizeResult<T> = Result<T, SizeError>;

impl SizeError {
    /// Classify an I/O error raised while inspecting `path`.
    #[must_use]
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();

        match source.kind() {
            ErrorKind::NotFound => Self::NotFound { path },
            ErrorKind::PermissionDenied => Self::AccessDenied { path, source },
            _ => Self::Io { path, source },
        }
    }

    /// Wrap an error raised while resolving the symbolic link at `path`.
    #[must_use]
    pub fn broken_symlink(path: &Path, source: io::Error) -> Self {
        Self::BrokenSymlink {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::AccessDenied { path, .. }
            | Self::BrokenSymlink { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}
