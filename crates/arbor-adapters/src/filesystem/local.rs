//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use arbor_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DirChild, EntryKind, PathHandle},
    error::ArborResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn resolve_root(&self, path: &Path) -> ArborResult<PathHandle> {
        let resolved =
            std::fs::canonicalize(path).map_err(|e| ApplicationError::from_root_io(path, &e))?;

        let metadata = std::fs::metadata(&resolved)
            .map_err(|e| ApplicationError::from_root_io(&resolved, &e))?;
        if !metadata.is_dir() {
            return Err(ApplicationError::NotADirectory { path: resolved }.into());
        }

        // Listing once up front turns an unreadable root into a fatal error
        // instead of a diagnostic.
        std::fs::read_dir(&resolved).map_err(|e| ApplicationError::from_root_io(&resolved, &e))?;

        Ok(PathHandle::directory(resolved))
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirChild>> {
        std::fs::read_dir(dir)?
            .map(|entry| {
                entry.map(|e| DirChild::new(e.file_name().to_string_lossy().into_owned(), e.path()))
            })
            .collect()
    }

    fn classify(&self, path: &Path) -> io::Result<EntryKind> {
        let metadata = std::fs::metadata(path)?;
        Ok(if metadata.is_dir() {
            EntryKind::Directory
        } else if metadata.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        })
    }
}
