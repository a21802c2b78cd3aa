//! Shared file reading utilities for the scanner
//!
//! Text detection, extension handling, and decoding of file contents.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of leading bytes inspected when deciding whether a file is text.
pub const SNIFF_LEN: u64 = 8192;

/// Decides whether a file should be treated as text.
///
/// Errors are I/O failures while inspecting the file and abort the scan.
pub trait TextClassifier {
    fn is_text(&self, path: &Path) -> io::Result<bool>;
}

impl<F> TextClassifier for F
where
    F: Fn(&Path) -> io::Result<bool>,
{
    fn is_text(&self, path: &Path) -> io::Result<bool> {
        self(path)
    }
}

/// Classifies files by inspecting their first [`SNIFF_LEN`] bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentSniffer;

impl TextClassifier for ContentSniffer {
    fn is_text(&self, path: &Path) -> io::Result<bool> {
        let mut sample = Vec::with_capacity(SNIFF_LEN as usize);
        File::open(path)?.take(SNIFF_LEN).read_to_end(&mut sample)?;
        Ok(is_likely_text(&sample))
    }
}

/// Heuristic text check on a leading sample of a file.
///
/// Empty input is text. Any NUL byte means binary. Otherwise the sample must
/// be valid UTF-8, allowing a multi-byte sequence cut off by the sample end.
pub fn is_likely_text(sample: &[u8]) -> bool {
    if sample.is_empty() {
        return true;
    }

    if sample.contains(&0) {
        return false;
    }

    match std::str::from_utf8(sample) {
        Ok(_) => true,
        Err(e) => e.error_len().is_none(),
    }
}

/// Read a file as text, replacing invalid UTF-8 sequences.
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = std::fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => Ok(String::from_utf8_lossy(e.as_bytes()).into_owned()),
    }
}

/// The extension of a path's final component, without the dot.
///
/// Dotfiles such as `.env` have no extension.
pub fn extension_of(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Normalize a user-supplied extension: trims whitespace and a leading dot.
///
/// Returns `None` for input that is empty after trimming.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim();
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_string())
    }
}
