//! treemd - dump a directory as a markdown file tree plus file contents

pub mod error;
pub mod file_utils;
pub mod git;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, ScanError};
pub use file_utils::{ContentSniffer, TextClassifier};
pub use git::{IgnoredPaths, resolve};
pub use output::{render_json, render_markdown, render_tree};
pub use stats::{TokenCounter, token_report};
pub use tree::{BUILTIN_EXCLUSIONS, FileContent, OutlineEntry, Scan, ScanConfig, TreeScanner};
