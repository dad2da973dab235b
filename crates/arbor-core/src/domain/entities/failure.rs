use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Coarse cause of a per-node failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    PermissionDenied,
    NotFound,
    Io,
}

/// A directory that could not be listed during a walk.
///
/// Reported to the `Diagnostics` port; never returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeFailure {
    path: PathBuf,
    kind: FailureKind,
    message: String,
}

impl NodeFailure {
    pub fn new(path: impl Into<PathBuf>, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }

    /// Build a failure from an I/O error, keeping its kind.
    pub fn from_io(path: impl Into<PathBuf>, err: &io::Error) -> Self {
        let kind = match err.kind() {
            io::ErrorKind::PermissionDenied => FailureKind::PermissionDenied,
            io::ErrorKind::NotFound => FailureKind::NotFound,
            _ => FailureKind::Io,
        };
        Self::new(path, kind, err.to_string())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for NodeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::PermissionDenied => write!(f, "Permission denied: {}", self.path.display()),
            FailureKind::NotFound => write!(f, "Directory vanished: {}", self.path.display()),
            FailureKind::Io => write!(
                f,
                "Error reading directory {}: {}",
                self.path.display(),
                self.message
            ),
        }
    }
}
