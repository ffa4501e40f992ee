//! Whole-buffer reads and atomic writes with file locking

use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::debug;

use crate::{Error, NormalizedPath, Result};

/// Read the whole file at `path` into a string.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let content =
        fs::read_to_string(&native_path).map_err(|e| Error::from_io(&native_path, e))?;
    debug!(path = %path, bytes = content.len(), "read source file");
    Ok(content)
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so the destination is never observed
/// half-written. An advisory lock is held while the temp file is filled.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    // Ensure parent directory exists
    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::from_io(parent, e))?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::from_io(&temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::from_io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::from_io(&temp_path, e))?;

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    fs::rename(&temp_path, &native_path).map_err(|e| Error::from_io(&native_path, e))?;

    debug!(path = %path, bytes = content.len(), "wrote output file");
    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
