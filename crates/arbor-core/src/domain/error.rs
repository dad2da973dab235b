// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid entry name '{name}': {reason}")]
    InvalidEntryName { name: String, reason: String },

    #[error("Path has no usable display name: {path}")]
    UnnamedPath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidEntryName { name, .. } => vec![
                format!("'{}' is not a base name", name),
                "Entry names must not contain path separators".into(),
            ],
            Self::UnnamedPath { path } => vec![
                format!("Could not derive a name for: {}", path),
                "Pass an absolute, normalized path".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidEntryName { .. } => ErrorCategory::Validation,
            Self::UnnamedPath { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
