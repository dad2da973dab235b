use std::path::PathBuf;

use serde::Serialize;

use super::EntryKind;

/// One emitted line of the rendered tree.
///
/// `text` is the decorated, human-facing rendering; the remaining fields
/// describe the same node for machine-readable sinks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    #[serde(skip)]
    pub text: String,
    pub depth: usize,
    pub name: String,
    pub kind: EntryKind,
    pub is_last: bool,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}
