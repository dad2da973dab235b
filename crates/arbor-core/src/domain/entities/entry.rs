use std::path::{Path, PathBuf};

use super::{DomainError, EntryKind, PathHandle};

/// Raw, unclassified child as enumerated by a filesystem adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirChild {
    pub name: String,
    pub path: PathBuf,
}

impl DirChild {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// One node of the rendered tree.
///
/// `name` is always a base name, never a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    handle: PathHandle,
    diagnostic: Option<String>,
}

impl Entry {
    /// Create an entry, rejecting names that are not plain base names.
    pub fn try_new(name: impl Into<String>, handle: PathHandle) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidEntryName {
                name,
                reason: "name is empty".into(),
            });
        }
        if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
            return Err(DomainError::InvalidEntryName {
                name,
                reason: "contains a path separator".into(),
            });
        }
        Ok(Self {
            name,
            handle,
            diagnostic: None,
        })
    }

    /// Entry for a walk root. Unlike children, the root of a filesystem has
    /// no base name and displays as its full path.
    pub fn for_root(handle: PathHandle) -> Result<Self, DomainError> {
        let name = handle.display_name();
        if name.is_empty() {
            return Err(DomainError::UnnamedPath {
                path: handle.to_string(),
            });
        }
        Ok(Self {
            name,
            handle,
            diagnostic: None,
        })
    }

    /// Entry for a child that could not be classified.
    pub fn inaccessible(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        cause: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            handle: PathHandle::new(path, EntryKind::Inaccessible),
            diagnostic: Some(cause.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> EntryKind {
        self.handle.kind()
    }

    pub fn path(&self) -> &Path {
        self.handle.path()
    }

    pub fn handle(&self) -> &PathHandle {
        &self.handle
    }

    /// Cause text when the entry could not be classified.
    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }
}
