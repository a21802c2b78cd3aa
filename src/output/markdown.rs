//! Markdown document formatting
//!
//! The document has two sections: the file tree inside a code fence, then
//! every included file as a bold `**name:**` heading followed by its content
//! in a code fence.

use crate::tree::Scan;

use super::tree::render_tree;

const FENCE: &str = "```";

/// Render a scan as a markdown document, without a trailing newline.
pub fn render_markdown(scan: &Scan) -> String {
    let tree = render_tree(&scan.outline);

    let mut lines: Vec<&str> = vec!["# File tree", FENCE, tree.as_str(), FENCE, ""];
    lines.push("# Files content");

    let headings: Vec<String> = scan
        .contents
        .iter()
        .map(|file| format!("**{}:**", file.name))
        .collect();
    for (heading, file) in headings.iter().zip(&scan.contents) {
        lines.extend([heading.as_str(), FENCE, file.content.as_str(), FENCE, ""]);
    }

    lines.join("\n")
}
