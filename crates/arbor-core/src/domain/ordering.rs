//! Filtering and ordering policy for directory listings.

use std::cmp::Ordering;

use super::Entry;

/// Leading marker of hidden entries.
pub const HIDDEN_MARKER: char = '.';

/// `true` for names that are never listed nor descended into.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Total order for siblings: directories first, plain files second, each
/// group by case-insensitive name. Anything that is not a regular file
/// (fifos, sockets, unclassifiable entries) sorts with the directories.
///
/// Equal keys compare `Equal`; callers must use a stable sort so those keep
/// enumeration order.
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    a.kind()
        .group()
        .cmp(&b.kind().group())
        .then_with(|| fold_case(a.name()).cmp(&fold_case(b.name())))
}

/// Sort siblings in place. Stable.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare_entries);
}

fn fold_case(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EntryKind, PathHandle};

    fn entry(name: &str, kind: EntryKind) -> Entry {
        Entry::try_new(name, PathHandle::new(format!("/r/{name}"), kind)).unwrap()
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(Entry::name).collect()
    }

    #[test]
    fn hidden_names_start_with_dot() {
        assert!(is_hidden(".git"));
        assert!(is_hidden("."));
        assert!(!is_hidden("git."));
        assert!(!is_hidden("a.txt"));
    }

    #[test]
    fn directories_precede_files_regardless_of_name() {
        let mut entries = vec![
            entry("a.txt", EntryKind::File),
            entry("zeta", EntryKind::Directory),
            entry("B.txt", EntryKind::File),
            entry("Alpha", EntryKind::Directory),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["Alpha", "zeta", "a.txt", "B.txt"]);
    }

    #[test]
    fn comparison_ignores_case() {
        let mut entries = vec![
            entry("banana", EntryKind::File),
            entry("Apple", EntryKind::File),
            entry("cherry", EntryKind::File),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn case_insensitive_ties_keep_enumeration_order() {
        let mut entries = vec![
            entry("README", EntryKind::File),
            entry("readme", EntryKind::File),
            entry("ReadMe", EntryKind::File),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["README", "readme", "ReadMe"]);
    }

    #[test]
    fn non_regular_entries_sort_with_directories() {
        let mut entries = vec![
            entry("0.txt", EntryKind::File),
            entry("b-dir", EntryKind::Directory),
            entry("a-pipe", EntryKind::Other),
            Entry::inaccessible("a-gone", "/r/a-gone", "gone"),
        ];
        sort_entries(&mut entries);
        assert_eq!(names(&entries), ["a-gone", "a-pipe", "b-dir", "0.txt"]);
    }
}
