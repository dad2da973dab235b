//! Output management and formatting.
//!
//! The tree itself is written by the `tree` command through a sink; this
//! module covers everything else the user sees: status lines, summaries and
//! per-directory failures.  Status goes to stdout, failures to stderr.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
#[derive(Clone)]
pub struct OutputManager {
    inner: Arc<Inner>,
}

struct Inner {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    stdout: Term,
    stderr: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Auto: Human on a TTY, Plain when piped.
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            inner: Arc::new(Inner {
                resolved_format,
                quiet: args.quiet,
                no_color: args.no_color
                    || config.output.no_color
                    || resolved_format != OutputFormat::Human,
                stdout: Term::stdout(),
                stderr: Term::stderr(),
            }),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.inner.quiet {
            return Ok(());
        }
        self.inner.stdout.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.inner.quiet {
            return Ok(());
        }
        let line = if self.inner.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.inner.stdout.write_line(&line)
    }

    /// Error indicator on stderr: `✗ <msg>`.  Never suppressed.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.inner.stderr.write_line(&self.error_line(msg))
    }

    /// The line [`Self::error`] writes.
    pub fn error_line(&self, msg: &str) -> String {
        if self.inner.no_color {
            format!("\u{2717} {msg}")
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        }
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.inner.quiet {
            return Ok(());
        }
        let line = if self.inner.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.inner.stdout.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.inner.quiet {
            return Ok(());
        }
        let line = if self.inner.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.inner.stdout.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.inner.no_color
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.inner.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(format: OutputFormat, quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(OutputFormat::Plain, true, true);
        assert!(out.print("hello").is_ok());
    }

    #[test]
    fn error_not_suppressed_in_quiet_mode() {
        let out = make_manager(OutputFormat::Plain, true, true);
        assert!(out.error("something went wrong").is_ok());
    }

    #[test]
    fn error_line_is_marked() {
        let out = make_manager(OutputFormat::Plain, false, true);
        assert_eq!(out.error_line("disk full"), "\u{2717} disk full");

        let colored = make_manager(OutputFormat::Human, false, false);
        assert!(colored.error_line("disk full").contains('\u{1b}'));
    }

    #[test]
    fn color_only_in_human_format() {
        assert!(make_manager(OutputFormat::Human, false, false).supports_color());
        assert!(!make_manager(OutputFormat::Human, false, true).supports_color());
        assert!(!make_manager(OutputFormat::Plain, false, false).supports_color());
        assert!(!make_manager(OutputFormat::Json, false, false).supports_color());
    }

    #[test]
    fn config_can_disable_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }

    #[test]
    fn format_accessor_returns_resolved() {
        let out = make_manager(OutputFormat::Json, false, false);
        assert_eq!(out.format(), OutputFormat::Json);
    }
}
