//! Whole-file replacement via temp file + rename.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::StorageError;

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("data"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Writes `contents` to `path` so readers see either the old file or the
/// new one, never a partial write.
pub(super) async fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
    }

    let temp = temp_path(path);
    fs::write(&temp, contents)
        .await
        .map_err(|e| StorageError::Io(e.to_string()))?;

    if let Err(e) = fs::rename(&temp, path).await {
        let _ = fs::remove_file(&temp).await;
        return Err(StorageError::Io(e.to_string()));
    }

    Ok(())
}

/// Reads a file, returning `None` if it does not exist.
pub(super) async fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path)
        .await
        .map(Some)
        .map_err(|e| StorageError::Io(e.to_string()))
}
