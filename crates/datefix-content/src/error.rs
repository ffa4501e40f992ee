//! Error types for datefix-content

/// Result type for datefix-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in datefix-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid block pattern: {0}")]
    Pattern(#[from] regex::Error),
}
