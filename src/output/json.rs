//! JSON output

use serde::Serialize;

use crate::tree::{FileContent, Scan};

#[derive(Serialize)]
struct JsonDocument<'a> {
    root: &'a str,
    tree: Vec<String>,
    files: &'a [FileContent],
}

/// Render a scan as pretty-printed JSON.
///
/// `tree` holds the outline lines (`#root`, `##src`, ...) and `files` the
/// included files with their root-relative paths.
pub fn render_json(scan: &Scan) -> serde_json::Result<String> {
    let root = scan.outline.first().map(|e| e.name.as_str()).unwrap_or(".");
    let document = JsonDocument {
        root,
        tree: scan.outline_lines(),
        files: &scan.contents,
    };
    serde_json::to_string_pretty(&document)
}
