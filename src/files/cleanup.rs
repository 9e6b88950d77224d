use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RegenError, Result};

/// Collect every entry directly inside `dir`, whatever its name encoding
fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(RegenError::NotFound(dir.to_path_buf()));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| RegenError::io(dir, e))? {
        let entry = entry.map_err(|e| RegenError::io(dir, e))?;
        entries.push(entry.path());
    }

    Ok(entries)
}

/// Delete everything inside `dir`, leaving the directory itself.
/// A missing directory has nothing to delete.
pub fn clear_directory(dir: &Path) -> Result<usize> {
    let entries = match list_entries(dir) {
        Ok(entries) => entries,
        Err(RegenError::NotFound(path)) => {
            log::info!("Nothing to delete, {} does not exist", path.display());
            return Ok(0);
        }
        Err(e) => return Err(e),
    };

    for path in &entries {
        // symlink_metadata so a link to a directory is unlinked, not followed
        let is_dir = fs::symlink_metadata(path)
            .map(|meta| meta.is_dir())
            .map_err(|e| RegenError::io(path, e))?;

        if is_dir {
            fs::remove_dir_all(path).map_err(|e| RegenError::io(path, e))?;
        } else {
            fs::remove_file(path).map_err(|e| RegenError::io(path, e))?;
        }
        log::debug!("Deleted {}", path.display());
    }

    log::info!("Deleted {} entries from {}", entries.len(), dir.display());
    Ok(entries.len())
}
