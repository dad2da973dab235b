//! Directory Lister - the leaf of the walk.
//!
//! Turns one directory into its ordered, filtered children:
//! 1. Enumerate immediate children
//! 2. Drop hidden names
//! 3. Classify what remains
//! 4. Sort (directories first, case-insensitive, stable)
//!
//! Enumeration failures are reported to `Diagnostics` and yield no children.

use tracing::debug;

use crate::{
    application::ports::{Diagnostics, Filesystem},
    domain::{DirChild, Entry, NodeFailure, PathHandle, is_hidden, sort_entries},
};

/// Lists a single directory for the renderer.
pub struct DirectoryLister {
    filesystem: Box<dyn Filesystem>,
    diagnostics: Box<dyn Diagnostics>,
}

impl DirectoryLister {
    pub fn new(filesystem: Box<dyn Filesystem>, diagnostics: Box<dyn Diagnostics>) -> Self {
        Self {
            filesystem,
            diagnostics,
        }
    }

    /// Ordered, visible children of `directory`.
    ///
    /// `directory` must be a confirmed directory. Never fails: an unreadable
    /// directory is reported once and treated as empty.
    pub fn list(&self, directory: &PathHandle) -> Vec<Entry> {
        let children = match self.filesystem.read_dir(directory.path()) {
            Ok(children) => children,
            Err(e) => {
                let failure = NodeFailure::from_io(directory.path(), &e);
                debug!(path = %directory, error = %e, "Listing failed");
                self.diagnostics.report(&failure);
                return Vec::new();
            }
        };

        let mut entries: Vec<Entry> = children
            .into_iter()
            .filter(|child| !is_hidden(&child.name))
            .map(|child| self.classify(child))
            .collect();

        sort_entries(&mut entries);

        debug!(path = %directory, count = entries.len(), "Listed directory");
        entries
    }

    pub(crate) fn filesystem(&self) -> &dyn Filesystem {
        self.filesystem.as_ref()
    }

    /// Classify a raw child. Anything that cannot be classified becomes an
    /// inaccessible entry carrying the cause.
    fn classify(&self, child: DirChild) -> Entry {
        let kind = match self.filesystem.classify(&child.path) {
            Ok(kind) => kind,
            Err(e) => {
                debug!(path = %child.path.display(), error = %e, "Classification failed");
                return Entry::inaccessible(child.name, child.path, e.to_string());
            }
        };

        match Entry::try_new(child.name.clone(), PathHandle::new(&child.path, kind)) {
            Ok(entry) => entry,
            Err(e) => Entry::inaccessible(child.name, child.path, e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::application::ports::{MockDiagnostics, MockFilesystem};
    use crate::domain::{EntryKind, FailureKind};

    fn child(name: &str) -> DirChild {
        DirChild::new(name, PathBuf::from("/root").join(name))
    }

    fn kind_of(path: &Path) -> io::Result<EntryKind> {
        let name = path.file_name().unwrap().to_string_lossy();
        if name == "ghost" {
            Err(io::Error::new(io::ErrorKind::NotFound, "vanished"))
        } else if name.contains('.') {
            Ok(EntryKind::File)
        } else {
            Ok(EntryKind::Directory)
        }
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(Entry::name).collect()
    }

    #[test]
    fn sorts_and_filters_children() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_dir().returning(|_| {
            Ok(vec![
                child("b.txt"),
                child("A"),
                child(".hidden"),
                child("a.txt"),
            ])
        });
        fs.expect_classify().returning(|p| kind_of(p));

        let mut diagnostics = MockDiagnostics::new();
        diagnostics.expect_report().never();

        let lister = DirectoryLister::new(Box::new(fs), Box::new(diagnostics));
        let entries = lister.list(&PathHandle::directory("/root"));

        assert_eq!(names(&entries), ["A", "a.txt", "b.txt"]);
        assert_eq!(entries[0].kind(), EntryKind::Directory);
    }

    #[test]
    fn hidden_children_are_never_classified() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_dir()
            .returning(|_| Ok(vec![child(".git"), child("src")]));
        fs.expect_classify()
            .withf(|p| p == Path::new("/root/src"))
            .times(1)
            .returning(|_| Ok(EntryKind::Directory));

        let lister = DirectoryLister::new(Box::new(fs), Box::new(MockDiagnostics::new()));
        assert_eq!(names(&lister.list(&PathHandle::directory("/root"))), ["src"]);
    }

    #[test]
    fn unreadable_directory_reports_once_and_is_empty() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_dir()
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));

        let mut diagnostics = MockDiagnostics::new();
        diagnostics
            .expect_report()
            .withf(|f| f.path() == Path::new("/locked") && f.kind() == FailureKind::PermissionDenied)
            .times(1)
            .return_const(());

        let lister = DirectoryLister::new(Box::new(fs), Box::new(diagnostics));
        assert!(lister.list(&PathHandle::directory("/locked")).is_empty());
    }

    #[test]
    fn vanished_child_becomes_inaccessible() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_dir()
            .returning(|_| Ok(vec![child("notes.md"), child("ghost")]));
        fs.expect_classify().returning(|p| kind_of(p));

        let mut diagnostics = MockDiagnostics::new();
        diagnostics.expect_report().never();

        let lister = DirectoryLister::new(Box::new(fs), Box::new(diagnostics));
        let entries = lister.list(&PathHandle::directory("/root"));

        assert_eq!(names(&entries), ["ghost", "notes.md"]);
        assert_eq!(entries[0].kind(), EntryKind::Inaccessible);
        assert!(entries[0].diagnostic().unwrap().contains("vanished"));
    }
}
