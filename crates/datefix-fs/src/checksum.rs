//! SHA-256 checksum utilities
//!
//! One canonical checksum format (`sha256:<hex>`) used for reporting and
//! change verification.

use sha2::{Digest, Sha256};

use crate::{Error, NormalizedPath, Result};

/// Prefix for all checksums produced by this module
const PREFIX: &str = "sha256:";

/// Checksum of in-memory content, in the canonical `"sha256:<hex>"` format.
pub fn content_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{}{:x}", PREFIX, hasher.finalize())
}

/// Checksum of a file's contents, in the canonical `"sha256:<hex>"` format.
pub fn file_checksum(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let content = std::fs::read(&native_path).map_err(|e| Error::from_io(&native_path, e))?;
    let mut hasher = Sha256::new();
    hasher.update(&content);
    Ok(format!("{}{:x}", PREFIX, hasher.finalize()))
}
