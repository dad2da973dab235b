//! ANSI color styler.

use arbor_core::{application::ports::Styler, domain::Entry, domain::EntryKind};
use owo_colors::OwoColorize;

use super::PlainStyler;

/// Colors the plain decoration: directories bright blue, files green,
/// errors red.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorStyler {
    plain: PlainStyler,
}

impl ColorStyler {
    pub fn new(plain: PlainStyler) -> Self {
        Self { plain }
    }
}

impl Styler for ColorStyler {
    fn decorate(&self, entry: &Entry) -> String {
        let text = self.plain.decorate(entry);
        match entry.kind() {
            EntryKind::Directory => text.bright_blue().bold().to_string(),
            EntryKind::File | EntryKind::Other => text.green().to_string(),
            EntryKind::Inaccessible => text.red().to_string(),
        }
    }
}
