//! In-memory sink for tests and buffering.

use std::sync::{Arc, RwLock};

use arbor_core::{
    application::{ApplicationError, ports::LineSink},
    domain::TreeLine,
    error::ArborResult,
};

/// Collects every emitted line.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<RwLock<Vec<TreeLine>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines, in emission order.
    pub fn lines(&self) -> Vec<TreeLine> {
        self.lines.read().map(|l| l.clone()).unwrap_or_default()
    }

    /// Rendered text of each line.
    pub fn texts(&self) -> Vec<String> {
        self.lines
            .read()
            .map(|l| l.iter().map(|line| line.text.clone()).collect())
            .unwrap_or_default()
    }

    /// Everything joined as it would appear on a terminal.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for text in self.texts() {
            out.push_str(&text);
            out.push('\n');
        }
        out
    }
}

impl LineSink for MemorySink {
    fn emit(&self, line: &TreeLine) -> ArborResult<()> {
        self.lines
            .write()
            .map_err(|_| ApplicationError::LockPoisoned {
                name: "memory sink",
            })?
            .push(line.clone());
        Ok(())
    }
}
