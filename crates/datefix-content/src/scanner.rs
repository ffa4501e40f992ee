//! Block scanning and rewriting over a source buffer

use regex::Regex;
use std::sync::LazyLock;

use crate::block::{DEFAULT_FROM_TOKEN, MatchedBlock, TokenPair};
use crate::edit::Edit;
use crate::error::Result;

/// Compiled pattern for the default token pair.
static DEFAULT_BLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| block_pattern(DEFAULT_FROM_TOKEN).unwrap());

/// Compile the block pattern for a from-token.
///
/// A block is `&[` followed by one or more entries of the form
/// `<from>( <anything but a closing paren> ),` with optional whitespace
/// after each comma, closed by `]`. The trailing comma on the last entry
/// is required.
fn block_pattern(from: &str) -> Result<Regex> {
    let pattern = format!(r"&\[\s*(?:{}\([^)]*\),\s*)+\]", regex::escape(from));
    Ok(Regex::new(&pattern)?)
}

/// Scans a source buffer for bracketed call-list blocks and rewrites the
/// from-token to the to-token inside each match.
///
/// Matches are found left-to-right and never overlap. Text outside matched
/// blocks is preserved verbatim, including occurrences of the from-token.
#[derive(Debug, Clone)]
pub struct BlockScanner {
    tokens: TokenPair,
    pattern: Regex,
}

impl Default for BlockScanner {
    fn default() -> Self {
        Self {
            tokens: TokenPair::default(),
            pattern: DEFAULT_BLOCK_PATTERN.clone(),
        }
    }
}

impl BlockScanner {
    /// Compile a scanner for the given token pair.
    pub fn new(tokens: TokenPair) -> Result<Self> {
        let pattern = block_pattern(&tokens.from)?;
        Ok(Self { tokens, pattern })
    }

    /// The token pair this scanner substitutes.
    pub fn tokens(&self) -> &TokenPair {
        &self.tokens
    }

    /// Find all blocks in the source buffer.
    pub fn find_blocks(&self, source: &str) -> Vec<MatchedBlock> {
        self.pattern
            .find_iter(source)
            .map(|m| MatchedBlock::new(m.as_str(), m.range()))
            .collect()
    }

    /// Rewrite every matched block, reassembling the buffer from unmatched
    /// spans and rewritten blocks.
    ///
    /// Substitution within a block is a plain left-to-right literal replace;
    /// each occurrence is consumed as it is replaced, so a to-token that
    /// contains the from-token as a substring cannot cascade.
    pub fn rewrite(&self, source: &str) -> RewriteOutcome {
        let mut output = String::with_capacity(source.len());
        let mut edits = Vec::new();
        let mut substitutions = 0;
        let mut cursor = 0;

        for m in self.pattern.find_iter(source) {
            let block = m.as_str();
            let rewritten = block.replace(&self.tokens.from, &self.tokens.to);
            substitutions += block.matches(self.tokens.from.as_str()).count();

            output.push_str(&source[cursor..m.start()]);
            output.push_str(&rewritten);
            cursor = m.end();

            edits.push(Edit::new(m.range(), block, rewritten));
        }
        output.push_str(&source[cursor..]);

        RewriteOutcome {
            output,
            edits,
            substitutions,
        }
    }
}

/// Output of one rewrite pass over a source buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The rewritten buffer.
    pub output: String,
    /// One edit per rewritten block, in source order.
    pub edits: Vec<Edit>,
    /// Total token substitutions across all blocks.
    pub substitutions: usize,
}

impl RewriteOutcome {
    /// True when at least one block was rewritten.
    pub fn changed(&self) -> bool {
        !self.edits.is_empty()
    }
}
