use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// File-type classification of a node.
///
/// Classification follows symlinks: a link to a directory is a `Directory`,
/// a dangling link is `Inaccessible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
    /// Exists but is neither a regular file nor a directory (fifo, socket, device).
    Other,
    /// Could not be classified or accessed.
    Inaccessible,
}

impl EntryKind {
    pub fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Sort group: regular files come after everything else.
    pub(crate) fn group(self) -> u8 {
        match self {
            Self::Directory | Self::Other | Self::Inaccessible => 0,
            Self::File => 1,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
            Self::Other => write!(f, "other"),
            Self::Inaccessible => write!(f, "inaccessible"),
        }
    }
}

/// A filesystem location plus its classification.
///
/// Invariant: a handle is only ever produced by root resolution or by a
/// directory listing. Nothing downstream re-resolves the path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathHandle {
    path: PathBuf,
    kind: EntryKind,
}

impl PathHandle {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Handle for a root that has already been confirmed to be a listable directory.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::new(path, EntryKind::Directory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }

    /// Base name of the location, or the whole path when it has none (`/`).
    pub fn display_name(&self) -> String {
        match self.path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => self.path.display().to_string(),
        }
    }
}

impl fmt::Display for PathHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_is_base_name() {
        let handle = PathHandle::directory("/srv/data/photos");
        assert_eq!(handle.display_name(), "photos");
    }

    #[test]
    fn filesystem_root_displays_full_path() {
        let handle = PathHandle::directory("/");
        assert_eq!(handle.display_name(), "/");
    }

    #[test]
    fn only_regular_files_sort_last() {
        assert_eq!(EntryKind::Directory.group(), 0);
        assert_eq!(EntryKind::Other.group(), 0);
        assert_eq!(EntryKind::Inaccessible.group(), 0);
        assert_eq!(EntryKind::File.group(), 1);
    }
}
