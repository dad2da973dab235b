//! Output sink adapters.

mod json;
mod memory;
mod writer;

pub use json::JsonLinesSink;
pub use memory::MemorySink;
pub use writer::WriterSink;
