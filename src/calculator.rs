//! Path size calculation.
//!
//! This module walks a file or directory tree and sums the byte length of
//! every counted entry. Hidden entries, excluded names and subdirectories are
//! skipped according to [`ScanOptions`]; symbolic links are resolved and
//! their target is measured with the same options.
//!
//! Failures on the path being measured are returned to the caller. Failures
//! on individual entries below it are logged and the entry counts as zero,
//! so one unreadable child does not hide the size of everything else.

use std::{fs, io, path::Path};

use humansize::BINARY;
use log::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::{
    config::{OutputOptions, ScanOptions},
    error::{SizeError, SizeResult},
    utils::{format_size, has_hidden_segment, is_hidden_name},
};

/// Measures the on-disk size of paths.
///
/// The `Calculator` holds the traversal options for one run. Every call to
/// [`Calculator::measure`] is independent; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Calculator {
    /// Configuration options for traversal behavior
    scan_options: ScanOptions,
}

impl Calculator {
    /// Create a new calculator with the specified options.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use std::path::Path;
    /// # use path_size::{Calculator, ScanOptions};
    /// let calculator = Calculator::new(ScanOptions::new(false, true));
    /// let bytes = calculator.measure(Path::new("target")).unwrap();
    /// ```
    #[must_use]
    pub const fn new(scan_options: ScanOptions) -> Self {
        Self { scan_options }
    }

    /// The options this calculator was built with.
    #[must_use]
    pub const fn options(&self) -> &ScanOptions {
        &self.scan_options
    }

    /// Measure the total size of `path`, in bytes.
    ///
    /// - A regular file counts its own length.
    /// - A directory counts its direct files, plus every nested file when
    ///   `recursive` is set.
    /// - A symbolic link counts the size of whatever it points to.
    ///
    /// When hidden entries are excluded and any segment of `path` is hidden,
    /// the result is `0` without touching the filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError::NotFound`] or [`SizeError::AccessDenied`] when
    /// `path` itself cannot be inspected or listed, and
    /// [`SizeError::BrokenSymlink`] when a symbolic link on the way (the path
    /// itself or one found while walking it) cannot be resolved.
    pub fn measure(&self, path: &Path) -> SizeResult<u64> {
        if !self.scan_options.include_hidden && has_hidden_segment(path) {
            debug!("Skipping hidden path {}", path.display());
            return Ok(0);
        }

        let metadata = fs::symlink_metadata(path).map_err(|e| SizeError::from_io(path, e))?;

        if metadata.file_type().is_symlink() {
            return self.measure_link(path);
        }

        if !metadata.is_dir() {
            return Ok(metadata.len());
        }

        self.measure_dir(path)
    }

    /// Resolve a symbolic link and measure its target.
    ///
    /// A relative target is joined onto the link's parent and stays relative,
    /// so directories above the measured path never count as hidden segments.
    fn measure_link(&self, link: &Path) -> SizeResult<u64> {
        fs::metadata(link).map_err(|e| SizeError::broken_symlink(link, e))?;

        let target = fs::read_link(link).map_err(|e| SizeError::broken_symlink(link, e))?;
        let target = match link.parent() {
            Some(parent) if target.is_relative() => parent.join(target),
            _ => target,
        };

        debug!("Following {} -> {}", link.display(), target.display());

        self.measure(&target)
    }

    /// Sum the sizes of the entries below `root`.
    ///
    /// Without `recursive` only the immediate children are visited and
    /// subdirectories count as zero. Symbolic links are always followed.
    fn measure_dir(&self, root: &Path) -> SizeResult<u64> {
        let max_depth = if self.scan_options.recursive {
            usize::MAX
        } else {
            1
        };

        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth)
            .into_iter()
            .filter_entry(|entry| self.should_visit(entry));

        let mut total = 0u64;

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => return Err(Self::walk_error(root, err)),
                Err(err) => {
                    info!("Skipping unreadable entry: {err}");
                    continue;
                }
            };

            let file_type = entry.file_type();

            if file_type.is_symlink() {
                total = total.saturating_add(self.measure_link(entry.path())?);
            } else if !file_type.is_dir() {
                total = total.saturating_add(Self::entry_len(&entry));
            }
        }

        debug!(
            "{}: {}",
            root.display(),
            humansize::format_size(total, BINARY)
        );

        Ok(total)
    }

    /// Length of a non-directory entry, or zero if its metadata is unreadable.
    fn entry_len(entry: &DirEntry) -> u64 {
        match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(err) => {
                info!("Skipping {}: {err}", entry.path().display());
                0
            }
        }
    }

    /// Check if an entry should be visited during traversal.
    ///
    /// Returning `false` for a directory also prunes everything below it.
    fn should_visit(&self, entry: &DirEntry) -> bool {
        let name = entry.file_name();

        if name
            .to_str()
            .is_some_and(|name| self.scan_options.is_excluded(name))
        {
            debug!("Skipping excluded entry {}", entry.path().display());
            return false;
        }

        if !self.scan_options.include_hidden && is_hidden_name(name) {
            debug!("Skipping hidden entry {}", entry.path().display());
            return false;
        }

        true
    }

    /// Convert a failure to list `root` itself into a [`SizeError`].
    fn walk_error(root: &Path, err: walkdir::Error) -> SizeError {
        let path = err.path().unwrap_or(root).to_path_buf();

        match err.into_io_error() {
            Some(source) => SizeError::from_io(&path, source),
            None => SizeError::Io {
                path,
                source: io::Error::other("filesystem loop detected"),
            },
        }
    }
}

/// Measure `path` with the given hidden-entry and recursion policy.
///
/// This is a shorthand for [`Calculator::measure`] with no excluded names.
///
/// # Errors
///
/// See [`Calculator::measure`].
pub fn calculate_size(path: &Path, include_hidden: bool, recursive: bool) -> SizeResult<u64> {
    Calculator::new(ScanOptions::new(include_hidden, recursive)).measure(path)
}

/// Measure `path` and render the result as a size string (`68B`, `5.4KB`).
///
/// # Errors
///
/// See [`Calculator::measure`].
pub fn get_path_size(
    path: &Path,
    recursive: bool,
    humanize: bool,
    include_hidden: bool,
) -> SizeResult<String> {
    let bytes = calculate_size(path, include_hidden, recursive)?;

    Ok(format_size(bytes, &OutputOptions::new(humanize)))
}
