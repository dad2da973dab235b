//! Sink writing rendered text to any `io::Write`.

use std::io::Write;
use std::sync::Mutex;

use arbor_core::{
    application::{ApplicationError, ports::LineSink},
    domain::TreeLine,
    error::ArborResult,
};

/// Writes each line's text followed by `\n`.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Flush and hand back the writer.
    pub fn into_inner(self) -> ArborResult<W> {
        let mut writer = self
            .writer
            .into_inner()
            .map_err(|_| ApplicationError::LockPoisoned {
                name: "writer sink",
            })?;
        writer.flush().map_err(|e| ApplicationError::OutputFailed {
            reason: e.to_string(),
        })?;
        Ok(writer)
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn emit(&self, line: &TreeLine) -> ArborResult<()> {
        let mut writer = self.writer.lock().map_err(|_| ApplicationError::LockPoisoned {
            name: "writer sink",
        })?;
        writeln!(writer, "{}", line.text).map_err(|e| ApplicationError::OutputFailed {
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
