//! Diagnostics that remember every report.

use std::sync::{Arc, RwLock};

use arbor_core::{application::ports::Diagnostics, domain::NodeFailure};

/// Records failures in memory. Clones share the same record, so one clone
/// can be handed to the renderer while another is inspected afterwards.
#[derive(Debug, Clone, Default)]
pub struct CollectingDiagnostics {
    failures: Arc<RwLock<Vec<NodeFailure>>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far, in report order.
    pub fn failures(&self) -> Vec<NodeFailure> {
        self.failures
            .read()
            .map(|f| f.clone())
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.failures.read().map(|f| f.len()).unwrap_or(0)
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&self, failure: &NodeFailure) {
        if let Ok(mut failures) = self.failures.write() {
            failures.push(failure.clone());
        }
    }
}
