use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegenError {
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Path exists but is not a directory: {}", .0.display())]
    Conflict(PathBuf),
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RegenError>;

impl RegenError {
    pub fn io<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
        RegenError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
