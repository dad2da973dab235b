//! Infrastructure adapters for Arbor.
//!
//! This crate implements the ports defined in `arbor-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod diagnostics;
pub mod filesystem;
pub mod sink;
pub mod styler;

// Re-export commonly used adapters
pub use diagnostics::{CollectingDiagnostics, TracingDiagnostics};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use sink::{JsonLinesSink, MemorySink, WriterSink};
pub use styler::{ColorStyler, PlainStyler};
