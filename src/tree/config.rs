//! Configuration types for the tree scanner

use std::path::Path;

use crate::file_utils::{extension_of, normalize_extension};

/// Inclusion policy and traversal options for a scan.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Allowed file extensions, without the leading dot. Empty allows all.
    pub extensions: Vec<String>,
    /// Extra bare-name glob patterns to exclude, on top of the built-in set
    pub ignore_patterns: Vec<String>,
    /// Consult git for ignored paths when no ignored set is supplied
    pub use_git: bool,
    /// Visit entries in lexicographic order instead of the filesystem's order
    pub sort: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            ignore_patterns: Vec::new(),
            use_git: true,
            sort: false,
        }
    }
}

impl ScanConfig {
    /// Set the extension allow-list, normalizing each entry.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    /// Check a file against the extension allow-list.
    pub fn allows_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        extension_of(path).is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}
