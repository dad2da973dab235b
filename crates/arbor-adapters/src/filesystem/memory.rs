//! In-memory filesystem adapter for testing.
//!
//! Children keep insertion order, so tests control enumeration order exactly.
//! Directories can be locked (listing fails with `PermissionDenied`) and nodes
//! can vanish after being listed, reproducing live-filesystem races.

use std::{
    collections::HashMap,
    io,
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use arbor_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::{DirChild, EntryKind, PathHandle},
    error::ArborResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    nodes: HashMap<PathBuf, Node>,
    /// Child names per directory, in insertion order. Names survive `vanish`.
    children: HashMap<PathBuf, Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Directory { readable: bool },
    File,
    Special,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Create a directory and all missing parents.
    pub fn dir(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path.as_ref(), Node::Directory { readable: true });
        self
    }

    /// Create a regular file (parents are created as directories).
    pub fn file(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path.as_ref(), Node::File);
        self
    }

    /// Create a node that is neither file nor directory (fifo, socket).
    pub fn special(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path.as_ref(), Node::Special);
        self
    }

    /// Create a directory whose listing fails with `PermissionDenied`.
    pub fn locked_dir(&self, path: impl AsRef<Path>) -> &Self {
        self.insert(path.as_ref(), Node::Directory { readable: false });
        self
    }

    /// Remove a node but keep its name in the parent's listing, as if it
    /// disappeared between enumeration and classification.
    pub fn vanish(&self, path: impl AsRef<Path>) -> &Self {
        let path = normalize(path.as_ref());
        let mut inner = self.inner.write().unwrap();
        inner.nodes.retain(|p, _| !p.starts_with(&path));
        inner.children.retain(|p, _| !p.starts_with(&path));
        self
    }

    /// Check if a node exists (testing helper).
    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        let inner = self.inner.read().unwrap();
        inner.nodes.contains_key(&normalize(path.as_ref()))
    }

    fn insert(&self, path: &Path, node: Node) {
        let path = normalize(path);
        let mut inner = self.inner.write().unwrap();

        let mut current = PathBuf::new();
        for component in path.components() {
            let parent = current.clone();
            current.push(component);
            let is_target = current == path;

            if !inner.nodes.contains_key(&current) {
                let created = if is_target {
                    node
                } else {
                    Node::Directory { readable: true }
                };
                inner.nodes.insert(current.clone(), created);
                if let Some(name) = current.file_name() {
                    inner
                        .children
                        .entry(parent)
                        .or_default()
                        .push(name.to_string_lossy().into_owned());
                }
            } else if is_target {
                inner.nodes.insert(current.clone(), node);
            }
        }
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for MemoryFilesystem {
    fn resolve_root(&self, path: &Path) -> ArborResult<PathHandle> {
        let inner = self.inner.read().map_err(|_| ApplicationError::LockPoisoned {
            name: "memory filesystem",
        })?;

        let path = normalize(path);
        match inner.nodes.get(&path) {
            None => Err(ApplicationError::RootNotFound { path }.into()),
            Some(Node::Directory { readable: true }) => Ok(PathHandle::directory(path)),
            Some(Node::Directory { readable: false }) => {
                Err(ApplicationError::RootPermissionDenied { path }.into())
            }
            Some(Node::File | Node::Special) => Err(ApplicationError::NotADirectory { path }.into()),
        }
    }

    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirChild>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| io::Error::other("memory filesystem lock poisoned"))?;

        match inner.nodes.get(dir) {
            Some(Node::Directory { readable: true }) => Ok(inner
                .children
                .get(dir)
                .map(|names| {
                    names
                        .iter()
                        .map(|name| DirChild::new(name.clone(), dir.join(name)))
                        .collect()
                })
                .unwrap_or_default()),
            Some(Node::Directory { readable: false }) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "Permission denied",
            )),
            Some(_) => Err(io::Error::other("Not a directory")),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        }
    }

    fn classify(&self, path: &Path) -> io::Result<EntryKind> {
        let inner = self
            .inner
            .read()
            .map_err(|_| io::Error::other("memory filesystem lock poisoned"))?;

        match inner.nodes.get(path) {
            Some(Node::Directory { .. }) => Ok(EntryKind::Directory),
            Some(Node::File) => Ok(EntryKind::File),
            Some(Node::Special) => Ok(EntryKind::Other),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            )),
        }
    }
}

/// Lexically normalize: drop `.`, resolve `..` against what came before.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
