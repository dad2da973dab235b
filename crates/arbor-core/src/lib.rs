//! Arbor Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Arbor
//! directory-tree renderer, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            arbor-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (TreeRenderer, DirectoryLister)      │
//! │      Depth-first walk, ordering         │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Diagnostics, Styler, Sink) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     arbor-adapters (Infrastructure)     │
//! │  (LocalFilesystem, PlainStyler, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Entry, PathHandle, RenderContext)     │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use arbor_core::prelude::*;
//!
//! // Adapters come from `arbor-adapters` (or your own port implementations).
//! let renderer = TreeRenderer::new(filesystem, diagnostics, styler);
//! let summary = renderer.render_path("./src", &sink)?;
//! println!("{} directories, {} files", summary.directories, summary.files);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DirectoryLister, RenderSummary, TreeRenderer,
        ports::{Diagnostics, Filesystem, LineSink, Styler},
    };
    pub use crate::domain::{
        DirChild, Entry, EntryKind, FailureKind, GlyphSet, NodeFailure, PathHandle,
        RenderContext, TreeLine,
    };
    pub use crate::error::{ArborError, ArborResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
