//! Shared utility functions for tree scanning

use std::fs::{self, DirEntry};
use std::path::Path;

use crate::error::{Result, ScanError};

/// Get the display name of a path, defaulting to "." when it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// List a directory, optionally sorted by file name.
///
/// Unsorted listings keep the order the filesystem returns.
pub fn read_entries(path: &Path, sort: bool) -> Result<Vec<DirEntry>> {
    let read_dir_error = |source| ScanError::ReadDir {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = fs::read_dir(path)
        .map_err(read_dir_error)?
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(read_dir_error)?;

    if sort {
        entries.sort_by_key(|e| e.file_name());
    }

    Ok(entries)
}
