//! Application layer for Arbor.
//!
//! This layer contains:
//! - **Services**: the walk itself (`TreeRenderer`) and its leaf (`DirectoryLister`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Ordering and geometry rules live in `crate::domain`; services only
//! sequence them against the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{DirectoryLister, RenderSummary, TreeRenderer};

// Re-export port traits (for adapter implementation)
pub use ports::{Diagnostics, Filesystem, LineSink, Styler};

pub use error::ApplicationError;
