//! Error types for tree scanning
//!
//! Filesystem failures during a scan are fatal and carry the path that failed.
//! The ignore resolver never produces one of these; it degrades to an empty set.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error raised while scanning a directory tree.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot access '{}': not a directory", .path.display())]
    RootNotDirectory { path: PathBuf },

    #[error("cannot read directory '{}'", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot stat '{}'", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read file '{}'", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// The path the failure is attributed to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::RootNotDirectory { path }
            | ScanError::ReadDir { path, .. }
            | ScanError::Metadata { path, .. }
            | ScanError::ReadFile { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
