//! Icon-and-marker styler without ANSI escapes.

use arbor_core::{application::ports::Styler, domain::Entry, domain::EntryKind};

const DIRECTORY_ICON: &str = "📂";
const FILE_ICON: &str = "📜";

/// Plain-text decoration: an icon before the name, and an error marker in
/// place of the name for inaccessible entries.
#[derive(Debug, Clone, Copy)]
pub struct PlainStyler {
    icons: bool,
}

impl PlainStyler {
    /// Styler with icons enabled.
    pub fn new() -> Self {
        Self { icons: true }
    }

    /// Toggle the directory/file icons.
    pub fn with_icons(mut self, icons: bool) -> Self {
        self.icons = icons;
        self
    }
}

impl Default for PlainStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl Styler for PlainStyler {
    fn decorate(&self, entry: &Entry) -> String {
        let icon = match entry.kind() {
            EntryKind::Inaccessible => return format!("[Error accessing: {}]", entry.name()),
            EntryKind::Directory => DIRECTORY_ICON,
            EntryKind::File | EntryKind::Other => FILE_ICON,
        };

        if self.icons {
            format!("{} {}", icon, entry.name())
        } else {
            entry.name().to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbor_core::domain::PathHandle;

    fn entry(name: &str, kind: EntryKind) -> Entry {
        Entry::try_new(name, PathHandle::new(format!("/r/{name}"), kind)).unwrap()
    }

    #[test]
    fn icons_by_kind() {
        let styler = PlainStyler::new();
        assert_eq!(styler.decorate(&entry("src", EntryKind::Directory)), "📂 src");
        assert_eq!(styler.decorate(&entry("a.rs", EntryKind::File)), "📜 a.rs");
        assert_eq!(styler.decorate(&entry("fifo", EntryKind::Other)), "📜 fifo");
    }

    #[test]
    fn without_icons_only_the_name_remains() {
        let styler = PlainStyler::new().with_icons(false);
        assert_eq!(styler.decorate(&entry("src", EntryKind::Directory)), "src");
    }

    #[test]
    fn inaccessible_gets_error_marker() {
        let gone = Entry::inaccessible("gone", "/r/gone", "vanished");
        for styler in [PlainStyler::new(), PlainStyler::new().with_icons(false)] {
            assert_eq!(styler.decorate(&gone), "[Error accessing: gone]");
        }
    }
}
