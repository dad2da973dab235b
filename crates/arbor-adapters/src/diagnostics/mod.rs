//! Diagnostics adapters for per-node listing failures.

mod collecting;
mod tracing_log;

pub use collecting::CollectingDiagnostics;
pub use tracing_log::TracingDiagnostics;
