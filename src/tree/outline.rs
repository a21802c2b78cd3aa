//! Scan results: the depth-annotated outline and the file contents

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    File,
}

/// One line of the outline.
///
/// Level 0 is the root label; an entry directly inside the root has level 1.
/// Displays as `#` repeated `level + 1` times followed by the name, so
/// `#project`, `##src`, `###main.rs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry {
    pub level: usize,
    pub name: String,
    pub kind: EntryKind,
}

impl OutlineEntry {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            level: 0,
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn dir(level: usize, name: impl Into<String>) -> Self {
        Self {
            level,
            name: name.into(),
            kind: EntryKind::Dir,
        }
    }

    pub fn file(level: usize, name: impl Into<String>) -> Self {
        Self {
            level,
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

impl fmt::Display for OutlineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..=self.level {
            f.write_str("#")?;
        }
        f.write_str(&self.name)
    }
}

/// An included file.
///
/// `name` is the bare file name and is what the document shows; two files with
/// the same name in different directories are told apart only by the outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileContent {
    pub name: String,
    /// Path relative to the scan root
    pub path: PathBuf,
    pub content: String,
}

/// Outline and contents produced by a scan, in pre-order.
///
/// The file entries of `outline` are in the same order as `contents`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub outline: Vec<OutlineEntry>,
    pub contents: Vec<FileContent>,
}

impl Scan {
    /// True when no file was included.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Move another scan's entries onto the end of this one.
    pub fn append(&mut self, other: Scan) {
        self.outline.extend(other.outline);
        self.contents.extend(other.contents);
    }

    /// Names of the file entries in the outline, in order.
    pub fn outline_file_names(&self) -> impl Iterator<Item = &str> {
        self.outline
            .iter()
            .filter(|e| e.is_file())
            .map(|e| e.name.as_str())
    }

    /// Names of the included files, in order.
    pub fn content_names(&self) -> impl Iterator<Item = &str> {
        self.contents.iter().map(|c| c.name.as_str())
    }

    /// Outline lines as strings, e.g. `##src`.
    pub fn outline_lines(&self) -> Vec<String> {
        self.outline.iter().map(ToString::to_string).collect()
    }
}
