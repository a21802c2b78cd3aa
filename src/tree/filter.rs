//! Exclusion rules for tree scanning

use std::path::Path;

use glob::Pattern;

use crate::git::IgnoredPaths;

/// Entry names that are never part of the output, whatever git says.
pub const BUILTIN_EXCLUSIONS: &[&str] =
    &[".git", ".gitignore", ".dockerignore", "package-lock.json"];

/// A user-supplied bare-name pattern.
///
/// Matches the name exactly or as a glob. Patterns that are not valid globs
/// only match exactly.
#[derive(Debug, Clone)]
pub struct NamePattern {
    raw: String,
    glob: Option<Pattern>,
}

impl NamePattern {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let glob = Pattern::new(&raw).ok();
        Self { raw, glob }
    }

    pub fn matches(&self, name: &str) -> bool {
        self.raw == name || self.glob.as_ref().is_some_and(|p| p.matches(name))
    }
}

/// Combined exclusion test applied to every directory entry.
///
/// Names are checked against the built-in set and user patterns; root-relative
/// paths against the git-ignored set. An excluded directory is never entered.
pub struct ExclusionRules<'a> {
    builtin: &'a [&'a str],
    ignored: &'a IgnoredPaths,
    patterns: &'a [NamePattern],
}

impl<'a> ExclusionRules<'a> {
    pub fn new(
        builtin: &'a [&'a str],
        ignored: &'a IgnoredPaths,
        patterns: &'a [NamePattern],
    ) -> Self {
        Self {
            builtin,
            ignored,
            patterns,
        }
    }

    pub fn excludes(&self, name: &str, relative: &Path) -> bool {
        self.builtin.iter().any(|b| *b == name)
            || self.ignored.contains(relative)
            || self.patterns.iter().any(|p| p.matches(name))
    }
}
