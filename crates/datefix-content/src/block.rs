//! Token pair and matched block types

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Token rewritten inside matched blocks by default.
pub const DEFAULT_FROM_TOKEN: &str = "ymd_hms";

/// Default replacement token.
pub const DEFAULT_TO_TOKEN: &str = "ymd_hmso";

/// A from/to pair of literal tokens for block-scoped substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Literal token to search for.
    pub from: String,
    /// Literal token to substitute.
    pub to: String,
}

impl Default for TokenPair {
    fn default() -> Self {
        Self {
            from: DEFAULT_FROM_TOKEN.to_string(),
            to: DEFAULT_TO_TOKEN.to_string(),
        }
    }
}

impl TokenPair {
    /// Create a token pair.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// A block matched in the source buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedBlock {
    /// Matched text, delimiters included.
    pub content: String,
    /// Byte range in the original source.
    pub span: Range<usize>,
}

impl MatchedBlock {
    /// Create a matched block.
    pub fn new(content: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            content: content.into(),
            span,
        }
    }

    /// Count non-overlapping occurrences of `token` in the block.
    pub fn occurrences(&self, token: &str) -> usize {
        if token.is_empty() {
            return 0;
        }
        self.content.matches(token).count()
    }
}
