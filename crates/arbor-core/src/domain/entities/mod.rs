pub mod entry;
pub mod failure;
pub mod path_handle;
pub mod render_context;
pub mod tree_line;

pub use crate::domain::DomainError;
pub use entry::{DirChild, Entry};
pub use failure::{FailureKind, NodeFailure};
pub use path_handle::{EntryKind, PathHandle};
pub use render_context::RenderContext;
pub use tree_line::TreeLine;
