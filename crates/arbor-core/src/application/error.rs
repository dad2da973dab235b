//! Application layer errors.
//!
//! These errors are fatal to a render call: an unusable root, or an output
//! sink that stopped accepting lines. Per-node failures inside a walk are
//! not errors; they go to the `Diagnostics` port.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that abort a render before or during output.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The root path does not exist.
    #[error("Path does not exist: {path}")]
    RootNotFound { path: PathBuf },

    /// The root path exists but is not a directory.
    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// The root directory exists but cannot be listed.
    #[error("Permission denied to access directory: {path}")]
    RootPermissionDenied { path: PathBuf },

    /// Any other failure while resolving the root.
    #[error("Error accessing path '{path}': {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The output sink rejected a line.
    #[error("Failed to write output: {reason}")]
    OutputFailed { reason: String },

    /// Shared adapter state was poisoned.
    #[error("Adapter state lock poisoned: {name}")]
    LockPoisoned { name: &'static str },
}

impl ApplicationError {
    /// Classify an I/O error raised while resolving `path` as a root.
    pub fn from_root_io(path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::RootNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::RootPermissionDenied { path },
            _ => Self::FilesystemError {
                path,
                reason: err.to_string(),
            },
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RootNotFound { path } => vec![
                format!("Nothing exists at: {}", path.display()),
                "Check the spelling, or pass an absolute path".into(),
            ],
            Self::NotADirectory { path } => vec![
                format!("'{}' is a file, not a directory", path.display()),
                "Pass the directory that contains it instead".into(),
            ],
            Self::RootPermissionDenied { path } => vec![
                format!("Cannot list: {}", path.display()),
                "Check that you have read and execute permission on it".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that the filesystem is mounted and readable".into(),
            ],
            Self::OutputFailed { .. } => vec![
                "The output stream was closed or is not writable".into(),
                "If piping, make sure the receiving command reads all input".into(),
            ],
            Self::LockPoisoned { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RootNotFound { .. } => ErrorCategory::NotFound,
            Self::NotADirectory { .. } => ErrorCategory::Validation,
            Self::RootPermissionDenied { .. } => ErrorCategory::PermissionDenied,
            Self::FilesystemError { .. } | Self::OutputFailed { .. } => ErrorCategory::Internal,
            Self::LockPoisoned { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn not_found_io_maps_to_root_not_found() {
        let err = io::Error::new(io::ErrorKind::NotFound, "missing");
        assert!(matches!(
            ApplicationError::from_root_io("/a", &err),
            ApplicationError::RootNotFound { .. }
        ));
    }

    #[test]
    fn permission_io_maps_to_permission_denied() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let mapped = ApplicationError::from_root_io("/a", &err);
        assert_eq!(mapped.category(), ErrorCategory::PermissionDenied);
    }

    #[test]
    fn other_io_keeps_reason() {
        let err = io::Error::other("stale handle");
        let mapped = ApplicationError::from_root_io("/nfs", &err);
        assert!(mapped.to_string().contains("stale handle"));
    }
}
