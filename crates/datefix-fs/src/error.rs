//! Error types for datefix-fs

use std::path::PathBuf;

/// Result type for datefix-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in datefix-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("File not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Lock acquisition failed for {}", path.display())]
    LockFailed { path: PathBuf },

    #[error("Failed to parse config at {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },
}

impl Error {
    /// Classify an I/O error by kind, keeping the path it occurred at.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}
