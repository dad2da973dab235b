//! Tree Renderer - main application orchestrator.
//!
//! Drives the depth-first walk:
//! 1. Resolve and validate the root (fatal on failure)
//! 2. Emit one line per visited node, in preorder
//! 3. Descend into directories through `DirectoryLister`
//!
//! The walk runs on an explicit LIFO stack instead of the call stack, so
//! tree depth is bounded only by memory. Children are pushed in reverse so
//! they pop in listing order, which keeps output identical to a recursive
//! preorder walk.

use std::path::Path;

use tracing::{info, instrument};

use crate::{
    application::{
        ports::{Diagnostics, Filesystem, LineSink, Styler},
        services::DirectoryLister,
    },
    domain::{Entry, EntryKind, GlyphSet, PathHandle, RenderContext, TreeLine},
    error::ArborResult,
};

/// Counts of the non-root nodes emitted by one render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub directories: usize,
    pub files: usize,
    pub other: usize,
    pub inaccessible: usize,
}

impl RenderSummary {
    fn record(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::Directory => self.directories += 1,
            EntryKind::File => self.files += 1,
            EntryKind::Other => self.other += 1,
            EntryKind::Inaccessible => self.inaccessible += 1,
        }
    }

    /// Number of lines emitted, the root included.
    pub fn lines(&self) -> usize {
        1 + self.directories + self.files + self.other + self.inaccessible
    }
}

/// A pending visit: the node and the context it will be drawn with.
struct Frame {
    entry: Entry,
    context: RenderContext,
}

/// Directory tree renderer.
pub struct TreeRenderer {
    lister: DirectoryLister,
    styler: Box<dyn Styler>,
    glyphs: GlyphSet,
}

impl TreeRenderer {
    /// Create a renderer with the given adapters and the Unicode glyph set.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        diagnostics: Box<dyn Diagnostics>,
        styler: Box<dyn Styler>,
    ) -> Self {
        Self {
            lister: DirectoryLister::new(filesystem, diagnostics),
            styler,
            glyphs: GlyphSet::default(),
        }
    }

    /// Use a different connector glyph set.
    pub fn with_glyphs(mut self, glyphs: GlyphSet) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Validate `path` as a root: it must exist, be a directory, and be listable.
    pub fn resolve_root(&self, path: impl AsRef<Path>) -> ArborResult<PathHandle> {
        self.lister.filesystem().resolve_root(path.as_ref())
    }

    /// Resolve `path` and render the tree below it.
    ///
    /// Root-resolution errors are returned before anything reaches `sink`.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn render_path(
        &self,
        path: impl AsRef<Path>,
        sink: &dyn LineSink,
    ) -> ArborResult<RenderSummary> {
        let root = self.resolve_root(path)?;
        self.render(&root, sink)
    }

    /// Render the tree below an already-validated root directory.
    ///
    /// Every discovered node yields exactly one line. Per-node failures are
    /// absorbed (see `DirectoryLister::list`); only a sink error aborts.
    pub fn render(&self, root: &PathHandle, sink: &dyn LineSink) -> ArborResult<RenderSummary> {
        let mut summary = RenderSummary::default();
        let mut stack = vec![Frame {
            entry: Entry::for_root(root.clone())?,
            context: RenderContext::root(),
        }];

        while let Some(Frame { entry, context }) = stack.pop() {
            sink.emit(&self.line(&entry, &context))?;
            if context.depth() > 0 {
                summary.record(entry.kind());
            }

            if !entry.kind().is_directory() {
                continue;
            }

            let children = self.lister.list(entry.handle());
            let Some(last) = children.len().checked_sub(1) else {
                continue;
            };

            let child_prefix = context.child_prefix(&self.glyphs);
            stack.extend(
                children
                    .into_iter()
                    .enumerate()
                    .rev()
                    .map(|(i, child)| Frame {
                        entry: child,
                        context: context.child(child_prefix.clone(), i == last),
                    }),
            );
        }

        info!(
            directories = summary.directories,
            files = summary.files,
            inaccessible = summary.inaccessible,
            "Render completed"
        );
        Ok(summary)
    }

    fn line(&self, entry: &Entry, context: &RenderContext) -> TreeLine {
        let mut text = String::from(context.prefix());
        text.push_str(context.connector(&self.glyphs));
        text.push_str(&self.styler.decorate(entry));

        TreeLine {
            text,
            depth: context.depth(),
            name: entry.name().to_owned(),
            kind: entry.kind(),
            is_last: context.is_last(),
            path: entry.path().to_path_buf(),
            diagnostic: entry.diagnostic().map(str::to_owned),
        }
    }
}
