//! Newline-delimited JSON sink.

use std::io::Write;
use std::sync::Mutex;

use arbor_core::{
    application::{ApplicationError, ports::LineSink},
    domain::TreeLine,
    error::{ArborResult, Context},
};

/// Writes one JSON object per line. Styling is ignored: only the node's
/// structural fields are serialized.
#[derive(Debug)]
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> ArborResult<W> {
        let mut writer = self
            .writer
            .into_inner()
            .map_err(|_| ApplicationError::LockPoisoned { name: "json sink" })?;
        writer.flush().map_err(|e| ApplicationError::OutputFailed {
            reason: e.to_string(),
        })?;
        Ok(writer)
    }
}

impl<W: Write + Send> LineSink for JsonLinesSink<W> {
    fn emit(&self, line: &TreeLine) -> ArborResult<()> {
        let json = serde_json::to_string(line).context("serializing tree line")?;
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned { name: "json sink" })?;
        writeln!(writer, "{json}").map_err(|e| ApplicationError::OutputFailed {
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
