//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `arbor-adapters` crate provides implementations.

use std::io;
use std::path::Path;

use crate::domain::{DirChild, Entry, EntryKind, NodeFailure, PathHandle, TreeLine};
use crate::error::ArborResult;

/// Port for filesystem access.
///
/// Implemented by:
/// - `arbor_adapters::filesystem::LocalFilesystem` (production)
/// - `arbor_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `resolve_root` is the only fallible-to-caller operation; everything the
///   walk calls afterwards returns raw `io::Result` so the services decide
///   how a failure is isolated.
/// - `read_dir` returns children unfiltered and unsorted, in enumeration order.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Normalize `path` and confirm it is an existing, listable directory.
    fn resolve_root(&self, path: &Path) -> ArborResult<PathHandle>;

    /// Enumerate the immediate children of a directory.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirChild>>;

    /// Classify a path, following symlinks.
    fn classify(&self, path: &Path) -> io::Result<EntryKind>;
}

/// Port for per-node failure reporting.
///
/// Implemented by:
/// - `arbor_adapters::diagnostics::TracingDiagnostics` (log only)
/// - `arbor_adapters::diagnostics::CollectingDiagnostics` (testing, summaries)
/// - the CLI's stderr reporter
#[cfg_attr(test, mockall::automock)]
pub trait Diagnostics: Send + Sync {
    /// Record that a directory could not be listed. The walk continues.
    fn report(&self, failure: &NodeFailure);
}

/// Port for name decoration.
///
/// Purely cosmetic: swapping stylers never changes which lines are emitted
/// or in what order.
pub trait Styler: Send + Sync {
    fn decorate(&self, entry: &Entry) -> String;
}

/// Port for rendered output.
///
/// Lines arrive in visit order. A sink error aborts the render.
pub trait LineSink: Send + Sync {
    fn emit(&self, line: &TreeLine) -> ArborResult<()>;
}
