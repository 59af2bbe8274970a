//! Atomic file write for generated configuration files.
//!
//! Strategy: write the content to a temporary file in the same directory,
//! sync it to disk, then rename it over the target. Rename is atomic on
//! POSIX when source and destination share a filesystem; on Windows the
//! existing target is removed first since rename does not replace there.
//! On crash a stray `.{filename}.tmp` may remain next to the target.

use crate::error::{Result, VsgenError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, replacing any existing file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            VsgenError::IoError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;
    replace(&temp_path, path)
}

/// Temporary file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| VsgenError::IoError(format!("invalid file path '{}'", target.display())))?;
    Ok(parent.join(format!(".{}.tmp", filename)))
}

/// Write content to a file and sync it to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        VsgenError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        VsgenError::IoError(format!("failed to write '{}': {}", path.display(), e))
    })?;

    file.sync_all().map_err(|e| {
        VsgenError::IoError(format!("failed to sync '{}': {}", path.display(), e))
    })
}

/// Rename the temporary file over the target.
fn replace(temp: &Path, target: &Path) -> Result<()> {
    // Windows rename fails when the destination exists.
    #[cfg(windows)]
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            VsgenError::IoError(format!(
                "failed to remove existing file '{}': {}",
                target.display(),
                e
            ))
        })?;
    }

    fs::rename(temp, target).map_err(|e| {
        let _ = fs::remove_file(temp);
        VsgenError::IoError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })
}
