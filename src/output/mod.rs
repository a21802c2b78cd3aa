//! Output formatting
//!
//! - `tree`: ASCII tree from the scan outline
//! - `markdown`: the tree plus every file's content as a markdown document
//! - `json`: the scan as structured JSON

mod json;
mod markdown;
mod tree;

pub use json::render_json;
pub use markdown::render_markdown;
pub use tree::render_tree;
