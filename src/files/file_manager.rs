use std::fs;
use std::io;
use std::path::Path;

use crate::error::{RegenError, Result};

/// Create a directory unless it is already there.
/// Returns true when the directory was created by this call.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        log::info!("Directory already present: {}", dir.display());
        return Ok(false);
    }

    // Something other than a directory is sitting at the path
    if dir.exists() {
        return Err(RegenError::Conflict(dir.to_path_buf()));
    }

    // Non-recursive: a missing parent is an error, not something to create
    match fs::create_dir(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && dir.is_dir() => return Ok(false),
        Err(e) => return Err(RegenError::io(dir, e)),
    }
    log::info!("Created directory: {}", dir.display());

    Ok(true)
}

/// Remove the whole output tree
pub fn purge_root(root: &Path) -> Result<()> {
    if root.exists() {
        fs::remove_dir_all(root).map_err(|e| RegenError::io(root, e))?;
        log::info!("Purged output directory: {}", root.display());
    }

    Ok(())
}

/// Check if a file exists
pub fn file_exists(file_path: &Path) -> bool {
    file_path.is_file()
}

/// Count number of files in a directory with specific extension
pub fn count_files(dir_path: &Path, extension: &str) -> Result<usize> {
    let mut count = 0;

    for entry in fs::read_dir(dir_path).map_err(|e| RegenError::io(dir_path, e))? {
        let entry = entry.map_err(|e| RegenError::io(dir_path, e))?;
        let path = entry.path();

        if path.is_file() && path.extension().map_or(false, |ext| ext == extension) {
            count += 1;
        }
    }

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_creates_then_tolerates() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("product");

        assert!(ensure_dir(&dir).unwrap());
        assert!(dir.is_dir());
        assert!(!ensure_dir(&dir).unwrap());
    }

    #[test]
    fn test_ensure_dir_requires_parent() {
        let temp_dir = TempDir::new().unwrap();
        let missing_parent = temp_dir.path().join("out");
        let dir = missing_parent.join("product");

        match ensure_dir(&dir) {
            Err(RegenError::Io { path, source }) => {
                assert_eq!(path, dir);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected io error, got {:?}", other),
        }
        assert!(!missing_parent.exists());
    }

    #[test]
    fn test_ensure_dir_conflict_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("product");
        fs::write(&path, b"not a directory").unwrap();

        match ensure_dir(&path) {
            Err(RegenError::Conflict(p)) => assert_eq!(p, path),
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[test]
    fn test_purge_root() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("product");
        fs::create_dir_all(root.join("title")).unwrap();
        fs::write(root.join("title/1.png"), b"png").unwrap();

        purge_root(&root).unwrap();
        assert!(!root.exists());

        // Purging a missing tree is a no-op
        purge_root(&root).unwrap();
    }

    #[test]
    fn test_count_files_by_extension() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("1.txt"), "a").unwrap();
        fs::write(dir.join("2.txt"), "b").unwrap();
        fs::write(dir.join("1.png"), "c").unwrap();
        fs::create_dir(dir.join("3.txt")).unwrap();

        assert_eq!(count_files(dir, "txt").unwrap(), 2);
        assert_eq!(count_files(dir, "png").unwrap(), 1);
        assert!(file_exists(&dir.join("1.png")));
        assert!(!file_exists(&dir.join("3.txt")));
    }
}
