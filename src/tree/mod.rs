//! Directory tree scanning
//!
//! `TreeScanner` walks a directory depth-first and returns a `Scan`: an outline
//! of the included entries annotated with depth, and the contents of every
//! included file, both in pre-order. Directories without any included file
//! beneath them are pruned from both.

mod config;
mod filter;
mod outline;
mod utils;
mod walker;

pub use config::ScanConfig;
pub use filter::{BUILTIN_EXCLUSIONS, ExclusionRules, NamePattern};
pub use outline::{EntryKind, FileContent, OutlineEntry, Scan};
pub use utils::display_name;
pub use walker::TreeScanner;
