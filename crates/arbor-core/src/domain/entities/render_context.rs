use crate::domain::GlyphSet;

/// Per-frame walk state.
///
/// Each frame owns its context; children receive a fresh one built by
/// [`RenderContext::child`], so siblings never observe each other's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    prefix: String,
    is_last: bool,
    depth: usize,
}

impl RenderContext {
    /// Context of the walk root: no prefix, always the last sibling.
    pub fn root() -> Self {
        Self {
            prefix: String::new(),
            is_last: true,
            depth: 0,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn is_last(&self) -> bool {
        self.is_last
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn connector(&self, glyphs: &GlyphSet) -> &'static str {
        glyphs.connector(self.is_last)
    }

    /// Prefix handed down to this node's children.
    pub fn child_prefix(&self, glyphs: &GlyphSet) -> String {
        let mut prefix = String::with_capacity(self.prefix.len() + 8);
        prefix.push_str(&self.prefix);
        prefix.push_str(glyphs.continuation(self.is_last));
        prefix
    }

    /// Context for a child, given the prefix from [`Self::child_prefix`].
    pub fn child(&self, prefix: String, is_last: bool) -> Self {
        Self {
            prefix,
            is_last,
            depth: self.depth + 1,
        }
    }
}
