//! `arbor tree` - draw a directory tree.

use std::io::{self, BufWriter};

use arbor_adapters::{ColorStyler, JsonLinesSink, LocalFilesystem, PlainStyler, WriterSink};
use arbor_core::{
    application::{RenderSummary, TreeRenderer, ports::Styler},
    domain::GlyphSet,
};
use tracing::{debug, instrument};

use crate::{
    cli::{OutputFormat, TreeArgs},
    config::AppConfig,
    diagnostics::StderrDiagnostics,
    error::CliResult,
    output::OutputManager,
};

/// Flags merged over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TreeSettings {
    glyphs: GlyphSet,
    icons: bool,
    summary: bool,
}

impl TreeSettings {
    fn resolve(args: &TreeArgs, config: &AppConfig) -> Self {
        Self {
            glyphs: if args.ascii {
                GlyphSet::ASCII
            } else {
                config.output.glyphs.glyph_set()
            },
            icons: !args.no_icons && config.output.icons,
            summary: args.summary || config.output.summary,
        }
    }
}

#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: TreeArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = TreeSettings::resolve(&args, &config);
    debug!(?settings, format = ?output.format(), "Tree settings resolved");

    let plain = PlainStyler::new().with_icons(settings.icons);
    let styler: Box<dyn Styler> = if output.supports_color() {
        Box::new(ColorStyler::new(plain))
    } else {
        Box::new(plain)
    };

    let renderer = TreeRenderer::new(
        Box::new(LocalFilesystem::new()),
        Box::new(StderrDiagnostics::new(output.clone())),
        styler,
    )
    .with_glyphs(settings.glyphs);

    let stdout = BufWriter::new(io::stdout());
    let summary = if output.format() == OutputFormat::Json {
        let sink = JsonLinesSink::new(stdout);
        let summary = renderer.render_path(&args.path, &sink)?;
        sink.into_inner()?;
        summary
    } else {
        let sink = WriterSink::new(stdout);
        let summary = renderer.render_path(&args.path, &sink)?;
        sink.into_inner()?;
        summary
    };

    if settings.summary && output.format() != OutputFormat::Json {
        output.print(&format!("\n{}", summary_line(&summary)))?;
    }

    Ok(())
}

/// `N directories, M files`, singular where it applies.
fn summary_line(summary: &RenderSummary) -> String {
    let files = summary.files + summary.other;
    let mut line = format!(
        "{} {}, {} {}",
        summary.directories,
        plural(summary.directories, "directory", "directories"),
        files,
        plural(files, "file", "files"),
    );
    if summary.inaccessible > 0 {
        line.push_str(&format!(", {} inaccessible", summary.inaccessible));
    }
    line
}

fn plural(n: usize, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::config::GlyphStyle;

    fn args(ascii: bool, no_icons: bool, summary: bool) -> TreeArgs {
        TreeArgs {
            path: PathBuf::from("."),
            ascii,
            no_icons,
            summary,
        }
    }

    #[test]
    fn flags_win_over_config() {
        let mut config = AppConfig::default();
        config.output.glyphs = GlyphStyle::Unicode;
        let s = TreeSettings::resolve(&args(true, true, true), &config);
        assert_eq!(s.glyphs, GlyphSet::ASCII);
        assert!(!s.icons);
        assert!(s.summary);
    }

    #[test]
    fn config_applies_without_flags() {
        let mut config = AppConfig::default();
        config.output.glyphs = GlyphStyle::Ascii;
        config.output.icons = false;
        config.output.summary = true;
        let s = TreeSettings::resolve(&args(false, false, false), &config);
        assert_eq!(s.glyphs, GlyphSet::ASCII);
        assert!(!s.icons);
        assert!(s.summary);
    }

    #[test]
    fn defaults_are_unicode_with_icons() {
        let s = TreeSettings::resolve(&args(false, false, false), &AppConfig::default());
        assert_eq!(s.glyphs, GlyphSet::UNICODE);
        assert!(s.icons);
        assert!(!s.summary);
    }

    #[test]
    fn summary_line_pluralizes() {
        let one = RenderSummary {
            directories: 1,
            files: 1,
            ..RenderSummary::default()
        };
        assert_eq!(summary_line(&one), "1 directory, 1 file");

        let many = RenderSummary {
            directories: 3,
            files: 4,
            other: 1,
            inaccessible: 2,
        };
        assert_eq!(summary_line(&many), "3 directories, 5 files, 2 inaccessible");
    }
}
