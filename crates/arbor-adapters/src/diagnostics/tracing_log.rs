//! Diagnostics that only log.

use arbor_core::{application::ports::Diagnostics, domain::NodeFailure};
use tracing::warn;

/// Emits each failure as a `WARN` event and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostics for TracingDiagnostics {
    fn report(&self, failure: &NodeFailure) {
        warn!(
            path = %failure.path().display(),
            kind = ?failure.kind(),
            error = failure.message(),
            "Could not list directory"
        );
    }
}
