//! Connector glyphs used to draw tree geometry.

/// The four segments a tree line is built from.
///
/// `last`/`branch` are connectors placed before a node's name; `indent`/`bar`
/// are the prefix segments handed down to that node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub last: &'static str,
    pub branch: &'static str,
    pub indent: &'static str,
    pub bar: &'static str,
}

impl GlyphSet {
    /// Heavy box-drawing glyphs.
    pub const UNICODE: Self = Self {
        last: "┗ ",
        branch: "┣ ",
        indent: "   ",
        bar: "┃  ",
    };

    /// Pure ASCII, for terminals and files that can't take box drawing.
    pub const ASCII: Self = Self {
        last: "`-- ",
        branch: "|-- ",
        indent: "    ",
        bar: "|   ",
    };

    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last { self.last } else { self.branch }
    }

    pub fn continuation(&self, is_last: bool) -> &'static str {
        if is_last { self.indent } else { self.bar }
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Self::UNICODE
    }
}
