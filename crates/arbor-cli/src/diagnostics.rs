//! Diagnostics that tell the user which directories could not be listed.

use arbor_adapters::TracingDiagnostics;
use arbor_core::{application::ports::Diagnostics, domain::NodeFailure};

use crate::output::OutputManager;

/// Prints each failure to stderr as `✗ <failure>` and logs it.
pub struct StderrDiagnostics {
    output: OutputManager,
    log: TracingDiagnostics,
}

impl StderrDiagnostics {
    pub fn new(output: OutputManager) -> Self {
        Self {
            output,
            log: TracingDiagnostics::new(),
        }
    }
}

impl Diagnostics for StderrDiagnostics {
    fn report(&self, failure: &NodeFailure) {
        self.log.report(failure);
        // Nowhere left to report a failing stderr.
        let _ = self.output.error(&failure.to_string());
    }
}

#[cfg(test)]
mod tests {
    use arbor_core::domain::FailureKind;

    use super::*;
    use crate::cli::{GlobalArgs, OutputFormat};
    use crate::config::AppConfig;

    fn diagnostics(no_color: bool) -> StderrDiagnostics {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color,
            config: None,
            output_format: OutputFormat::Human,
        };
        StderrDiagnostics::new(OutputManager::new(&args, &AppConfig::default()))
    }

    /// The line `report` writes to stderr for `failure`.
    fn line(diag: &StderrDiagnostics, failure: &NodeFailure) -> String {
        diag.output.error_line(&failure.to_string())
    }

    #[test]
    fn permission_denied_line() {
        let failure = NodeFailure::new("/r/locked", FailureKind::PermissionDenied, "denied");
        assert_eq!(
            line(&diagnostics(true), &failure),
            "\u{2717} Permission denied: /r/locked"
        );
    }

    #[test]
    fn vanished_directory_line() {
        let failure = NodeFailure::new("/r/tmp", FailureKind::NotFound, "gone");
        assert_eq!(
            line(&diagnostics(true), &failure),
            "\u{2717} Directory vanished: /r/tmp"
        );
    }

    #[test]
    fn report_is_not_silenced_by_quiet() {
        // quiet mode still writes failures; this only checks it cannot panic
        let failure = NodeFailure::new("/r/locked", FailureKind::PermissionDenied, "denied");
        diagnostics(false).report(&failure);
    }
}
