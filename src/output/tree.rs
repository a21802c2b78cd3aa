//! ASCII tree rendering from a depth-annotated outline
//!
//! The first outline entry is the root label and is printed bare; every other
//! entry gets `├── ` or `└── ` plus one `│   ` or `    ` column per ancestor.

use crate::tree::OutlineEntry;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// Render an outline as a tree, one line per entry, without a trailing newline.
pub fn render_tree(outline: &[OutlineEntry]) -> String {
    let last = last_sibling_flags(outline);
    let mut output = String::new();
    // Whether the ancestor at each level has siblings still to come
    let mut open: Vec<bool> = Vec::new();

    for (i, entry) in outline.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        if entry.level == 0 {
            output.push_str(&entry.name);
            open.clear();
            continue;
        }

        for level in 1..entry.level {
            let continues = open.get(level).copied().unwrap_or(false);
            output.push_str(if continues { PIPE } else { SPACE });
        }
        output.push_str(if last[i] { LAST_BRANCH } else { BRANCH });
        output.push_str(&entry.name);

        open.resize(entry.level + 1, false);
        open[entry.level] = !last[i];
    }

    output
}

/// For each entry, whether no later sibling follows it under the same parent.
fn last_sibling_flags(outline: &[OutlineEntry]) -> Vec<bool> {
    let mut last = vec![true; outline.len()];
    let mut sibling_below: Vec<bool> = Vec::new();

    for (i, entry) in outline.iter().enumerate().rev() {
        let level = entry.level;
        if sibling_below.len() <= level {
            sibling_below.resize(level + 1, false);
        }
        last[i] = !sibling_below[level];
        sibling_below[level] = true;
        sibling_below.truncate(level + 1);
    }

    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_only() {
        let outline = vec![OutlineEntry::root("project")];
        assert_eq!(render_tree(&outline), "project");
    }

    #[test]
    fn test_flat_tree() {
        let outline = vec![
            OutlineEntry::root("project"),
            OutlineEntry::file(1, "a.txt"),
            OutlineEntry::file(1, "b.txt"),
        ];
        assert_eq!(render_tree(&outline), "project\n├── a.txt\n└── b.txt");
    }

    #[test]
    fn test_nested_tree() {
        let outline = vec![
            OutlineEntry::root("project"),
            OutlineEntry::dir(1, "src"),
            OutlineEntry::dir(2, "foo"),
            OutlineEntry::file(3, "mod.rs"),
            OutlineEntry::file(2, "main.rs"),
            OutlineEntry::file(1, "README.md"),
        ];
        let expected = "\
project
├── src
│   ├── foo
│   │   └── mod.rs
│   └── main.rs
└── README.md";
        assert_eq!(render_tree(&outline), expected);
    }

    #[test]
    fn test_last_directory_uses_blank_column() {
        let outline = vec![
            OutlineEntry::root("project"),
            OutlineEntry::file(1, "a.txt"),
            OutlineEntry::dir(1, "src"),
            OutlineEntry::dir(2, "deep"),
            OutlineEntry::file(3, "x.rs"),
            OutlineEntry::file(3, "y.rs"),
        ];
        let expected = "\
project
├── a.txt
└── src
    └── deep
        ├── x.rs
        └── y.rs";
        assert_eq!(render_tree(&outline), expected);
    }

    #[test]
    fn test_empty_outline() {
        assert_eq!(render_tree(&[]), "");
    }
}
