//! Git repository integration
//!
//! Resolves the set of paths git considers ignored beneath a scan root.
//! Any failure along the way yields an empty set: a broken or missing
//! repository makes filtering less accurate, it never stops a scan.

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use git2::{Repository, StatusOptions};
use thiserror::Error;
use tracing::{debug, trace};

/// Paths excluded by version control, relative to the scan root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoredPaths(HashSet<PathBuf>);

impl IgnoredPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a root-relative path is ignored.
    pub fn contains(&self, relative: &Path) -> bool {
        self.0.contains(relative)
    }

    pub fn insert(&mut self, relative: impl Into<PathBuf>) -> bool {
        self.0.insert(relative.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.0.iter().map(PathBuf::as_path)
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for IgnoredPaths {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, Error)]
enum ResolveError {
    #[error(transparent)]
    Git(#[from] git2::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("repository has no working tree")]
    Bare,
    #[error("'{}' is outside the working tree", .0.display())]
    OutsideWorkdir(PathBuf),
}

/// Resolve the paths git reports as ignored under `root`.
///
/// Returned paths are relative to `root`. Ignored directories are expanded
/// to the files inside them, so a root nested within an ignored directory
/// still sees its own ignored entries.
///
/// Returns an empty set when `root` is not inside a git working tree or the
/// status query fails for any reason.
pub fn resolve(root: &Path) -> IgnoredPaths {
    match try_resolve(root) {
        Ok(ignored) => {
            debug!(root = %root.display(), count = ignored.len(), "resolved git-ignored paths");
            ignored
        }
        Err(e) => {
            debug!(root = %root.display(), error = %e, "no git ignore information, continuing without it");
            IgnoredPaths::new()
        }
    }
}

fn try_resolve(root: &Path) -> Result<IgnoredPaths, ResolveError> {
    let repo = Repository::discover(root)?;
    let workdir = repo.workdir().ok_or(ResolveError::Bare)?.canonicalize()?;
    let root = root.canonicalize()?;
    let subtree = root
        .strip_prefix(&workdir)
        .map_err(|_| ResolveError::OutsideWorkdir(root.clone()))?
        .to_path_buf();

    let mut opts = StatusOptions::new();
    opts.include_ignored(true)
        .include_untracked(true)
        .recurse_untracked_dirs(true)
        .recurse_ignored_dirs(true);
    if !subtree.as_os_str().is_empty() {
        opts.pathspec(pathspec(&subtree));
    }

    let statuses = repo.statuses(Some(&mut opts))?;
    let mut ignored = IgnoredPaths::new();
    for entry in statuses.iter() {
        if !entry.status().is_ignored() {
            continue;
        }
        let Some(path) = entry.path() else {
            continue;
        };
        let path = Path::new(path.trim_end_matches('/'));
        match path.strip_prefix(&subtree) {
            Ok(relative) if !relative.as_os_str().is_empty() => {
                trace!(path = %relative.display(), "git-ignored");
                ignored.insert(relative);
            }
            _ => {}
        }
    }

    Ok(ignored)
}

/// Git pathspecs always use forward slashes.
fn pathspec(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
