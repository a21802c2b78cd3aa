//! Token statistics for rendered documents
//!
//! Counts use the GPT-3 `r50k_base` byte-pair encoding.

use anyhow::{Context, Result};
use tiktoken_rs::{CoreBPE, r50k_base};

/// Counts tokens in rendered output.
pub struct TokenCounter {
    bpe: CoreBPE,
}

impl TokenCounter {
    pub fn new() -> Result<Self> {
        let bpe = r50k_base().context("load r50k_base encoding")?;
        Ok(Self { bpe })
    }

    /// Number of tokens in `text`, with special-token markers counted as plain text.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

/// One-line report written to stderr after the document.
pub fn token_report(count: usize) -> String {
    format!("Token count: {}", count)
}
