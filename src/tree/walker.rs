//! TreeScanner - recursive scan producing the outline and the file contents

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, ScanError};
use crate::file_utils::{ContentSniffer, TextClassifier, read_text};
use crate::git::{self, IgnoredPaths};

use super::config::ScanConfig;
use super::filter::{BUILTIN_EXCLUSIONS, ExclusionRules, NamePattern};
use super::outline::{FileContent, OutlineEntry, Scan};
use super::utils::{display_name, read_entries};

/// Scans a directory tree depth-first.
///
/// Every scan returns the outline and the contents of every included file, in
/// pre-order. A directory only shows up in the outline when something beneath
/// it was included.
pub struct TreeScanner<C = ContentSniffer> {
    config: ScanConfig,
    patterns: Vec<NamePattern>,
    classifier: C,
    ignored: Option<IgnoredPaths>,
}

impl TreeScanner {
    pub fn new(config: ScanConfig) -> Self {
        let patterns = config.ignore_patterns.iter().map(NamePattern::new).collect();
        Self {
            config,
            patterns,
            classifier: ContentSniffer,
            ignored: None,
        }
    }
}

impl<C: TextClassifier> TreeScanner<C> {
    /// Replace the text classifier.
    pub fn with_classifier<D: TextClassifier>(self, classifier: D) -> TreeScanner<D> {
        TreeScanner {
            config: self.config,
            patterns: self.patterns,
            classifier,
            ignored: self.ignored,
        }
    }

    /// Use a precomputed ignored set instead of asking git.
    pub fn with_ignored(mut self, ignored: IgnoredPaths) -> Self {
        self.ignored = Some(ignored);
        self
    }

    /// Scan `root`, returning an outline that starts with the root label.
    ///
    /// Git is queried once here, never per directory.
    pub fn scan(&self, root: &Path) -> Result<Scan> {
        let metadata = fs::metadata(root).map_err(|source| ScanError::Metadata {
            path: root.to_path_buf(),
            source,
        })?;
        if !metadata.is_dir() {
            return Err(ScanError::RootNotDirectory {
                path: root.to_path_buf(),
            });
        }

        let ignored = match (&self.ignored, self.config.use_git) {
            (Some(ignored), _) => Cow::Borrowed(ignored),
            (None, true) => Cow::Owned(git::resolve(root)),
            (None, false) => Cow::Owned(IgnoredPaths::new()),
        };

        let body = self.scan_dir(root, root, &ignored, 0)?;
        debug!(
            root = %root.display(),
            files = body.contents.len(),
            "scan complete"
        );

        let mut scan = Scan {
            outline: Vec::with_capacity(body.outline.len() + 1),
            contents: Vec::new(),
        };
        scan.outline.push(OutlineEntry::root(display_name(root)));
        scan.append(body);
        Ok(scan)
    }

    /// Scan the entries of `current`, which lies inside `root`.
    ///
    /// `depth` is 0 for the root's own entries. The returned outline holds only
    /// what is beneath `current`, each entry at level `depth + 1` or deeper.
    pub fn scan_dir(
        &self,
        root: &Path,
        current: &Path,
        ignored: &IgnoredPaths,
        depth: usize,
    ) -> Result<Scan> {
        let rules = ExclusionRules::new(BUILTIN_EXCLUSIONS, ignored, &self.patterns);
        let level = depth + 1;
        let mut scan = Scan::default();

        for entry in read_entries(current, self.config.sort)? {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let relative = path.strip_prefix(root).unwrap_or(&path);

            if rules.excludes(&name, relative) {
                trace!(path = %relative.display(), "excluded");
                continue;
            }

            // Follows symlinks
            let metadata = fs::metadata(&path).map_err(|source| ScanError::Metadata {
                path: path.clone(),
                source,
            })?;

            if metadata.is_dir() {
                let sub = self.scan_dir(root, &path, ignored, depth + 1)?;
                if sub.is_empty() {
                    trace!(path = %relative.display(), "pruned directory with no included files");
                    continue;
                }
                scan.outline.push(OutlineEntry::dir(level, name));
                scan.append(sub);
            } else if metadata.is_file() {
                if !self.config.allows_extension(&path) {
                    continue;
                }
                let is_text = self
                    .classifier
                    .is_text(&path)
                    .map_err(|source| ScanError::ReadFile {
                        path: path.clone(),
                        source,
                    })?;
                if !is_text {
                    trace!(path = %relative.display(), "skipped non-text file");
                    continue;
                }
                let content = read_text(&path).map_err(|source| ScanError::ReadFile {
                    path: path.clone(),
                    source,
                })?;
                scan.outline.push(OutlineEntry::file(level, name.clone()));
                scan.contents.push(FileContent {
                    name,
                    path: relative.to_path_buf(),
                    content,
                });
            }
        }

        Ok(scan)
    }
}
