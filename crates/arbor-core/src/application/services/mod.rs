//! Application services - orchestrate use cases.
//!
//! `TreeRenderer` drives the walk; `DirectoryLister` answers "what is inside
//! this directory, in what order" for it.

pub mod directory_lister;
pub mod tree_renderer;

pub use directory_lister::DirectoryLister;
pub use tree_renderer::{RenderSummary, TreeRenderer};
