//! Core domain layer for Arbor.
//!
//! This module contains pure logic with no I/O: what a tree node is, how
//! siblings are filtered and ordered, and how tree geometry is drawn.
//! Filesystem access, styling and output are reached only through the ports
//! in `crate::application::ports`.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem or terminal calls
//! - **Immutable entities**: nothing is mutated after construction
pub mod entities;
pub mod error;
pub mod glyphs;
pub mod ordering;

pub use entities::{
    DirChild, Entry, EntryKind, FailureKind, NodeFailure, PathHandle, RenderContext, TreeLine,
};
pub use error::{DomainError, ErrorCategory};
pub use glyphs::GlyphSet;
pub use ordering::{compare_entries, is_hidden, sort_entries};
