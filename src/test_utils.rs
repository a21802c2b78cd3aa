//! Test utilities for building temporary directory trees and git repositories.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Bytes that every text classifier in this crate treats as binary.
pub const BINARY_CONTENT: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];

/// A temporary directory, optionally a git repository.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestRepo {
    dir: TempDir,
    git_initialized: bool,
}

impl TestRepo {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            git_initialized: false,
        }
    }

    /// Create a new temporary directory with git initialized.
    pub fn with_git() -> Self {
        let mut repo = Self::new();
        repo.init_git();
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Initialize a git repository in the temporary directory.
    ///
    /// Also configures user.email and user.name for commits.
    pub fn init_git(&mut self) {
        self.git(&["init"]);
        self.git(&["config", "user.email", "test@test.com"]);
        self.git(&["config", "user.name", "Test"]);
        self.git_initialized = true;
    }

    fn git(&self, args: &[&str]) {
        Command::new("git")
            .args(args)
            .current_dir(self.dir.path())
            .output()
            .expect("Failed to run git");
    }

    fn write(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a text file and stage it if git is initialized.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.write(path, content.as_bytes());
        if self.git_initialized {
            self.git(&["add", path]);
        }
        full_path
    }

    /// Add a text file without staging it.
    pub fn add_untracked(&self, path: &str, content: &str) -> PathBuf {
        self.write(path, content.as_bytes())
    }

    /// Add a binary file without staging it.
    pub fn add_binary(&self, path: &str) -> PathBuf {
        self.write(path, BINARY_CONTENT)
    }

    /// Create an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Stage a file even if `.gitignore` excludes it.
    pub fn force_add(&self, path: &str) {
        assert!(self.git_initialized, "Git not initialized");
        self.git(&["add", "-f", path]);
    }

    /// Stage all files in the repository.
    pub fn stage_all(&self) {
        if self.git_initialized {
            self.git(&["add", "."]);
        }
    }

    /// Create a commit with the given message.
    pub fn commit(&self, message: &str) {
        assert!(self.git_initialized, "Git not initialized");
        self.git(&["commit", "-m", message, "--allow-empty"]);
    }
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}
