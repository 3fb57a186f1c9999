//! Path inspection helpers.

use std::{
    ffi::OsStr,
    path::{Component, Path},
};

/// Whether a file name marks a hidden entry.
///
/// A name is hidden when it starts with `.`, except for the `.` and `..`
/// special names.
#[must_use]
pub fn is_hidden_name(name: &OsStr) -> bool {
    let bytes = name.as_encoded_bytes();
    bytes.first() == Some(&b'.') && bytes != b"." && bytes != b".."
}

/// Whether any segment of `path` is hidden.
///
/// Every segment counts, not only the last one: `.cache/data.bin` is hidden
/// even though `data.bin` is not. The path is normalized lexically first, so
/// a segment cancelled by a following `..` (`dir/.hidden/..`) does not count.
#[must_use]
pub fn has_hidden_segment(path: &Path) -> bool {
    let mut segments: Vec<&OsStr> = Vec::new();

    for component in path.components() {
        match component {
            Component::Normal(name) => segments.push(name),
            Component::ParentDir => {
                segments.pop();
            }
            _ => {}
        }
    }

    segments.into_iter().any(is_hidden_name)
}
