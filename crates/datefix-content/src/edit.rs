//! Edit records for block rewrites

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single replacement applied to a source buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    /// Byte range of the replaced text in the buffer the edit was made against.
    pub span: Range<usize>,
    /// Text that occupied the span.
    pub old_content: String,
    /// Text that replaces it.
    pub new_content: String,
}

impl Edit {
    /// Create an edit record.
    pub fn new(
        span: Range<usize>,
        old_content: impl Into<String>,
        new_content: impl Into<String>,
    ) -> Self {
        Self {
            span,
            old_content: old_content.into(),
            new_content: new_content.into(),
        }
    }

    /// Apply this edit to a buffer.
    ///
    /// The span must lie on character boundaries of `source`.
    pub fn apply(&self, source: &str) -> String {
        let mut result = String::with_capacity(source.len() + self.new_content.len());
        result.push_str(&source[..self.span.start]);
        result.push_str(&self.new_content);
        result.push_str(&source[self.span.end..]);
        result
    }

    /// The edit that undoes this one when applied to the edited buffer.
    pub fn inverse(&self) -> Edit {
        Edit {
            span: self.span.start..self.span.start + self.new_content.len(),
            old_content: self.new_content.clone(),
            new_content: self.old_content.clone(),
        }
    }
}
