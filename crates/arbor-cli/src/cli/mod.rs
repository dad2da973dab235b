//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No rendering logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "arbor",
    bin_name = "arbor",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f333} Directory trees, drawn deterministically",
    long_about = "Arbor prints the structure of a directory as a tree: \
                  directories first, names sorted case-insensitively, \
                  hidden entries skipped, unreadable branches reported \
                  without stopping the walk.",
    after_help = "EXAMPLES:\n\
        \x20 arbor tree .\n\
        \x20 arbor tree ~/projects --ascii --no-icons\n\
        \x20 arbor --output-format json tree src\n\
        \x20 arbor completions bash > /usr/share/bash-completion/completions/arbor",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the tree below a directory.
    #[command(
        visible_alias = "t",
        about = "Print a directory tree",
        after_help = "EXAMPLES:\n\
            \x20 arbor tree\n\
            \x20 arbor tree /etc --summary\n\
            \x20 arbor tree . --ascii > tree.txt"
    )]
    Tree(TreeArgs),

    /// Initialise an Arbor configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 arbor init\n\
            \x20 arbor init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 arbor completions bash > ~/.local/share/bash-completion/completions/arbor\n\
            \x20 arbor completions zsh  > ~/.zfunc/_arbor\n\
            \x20 arbor completions fish > ~/.config/fish/completions/arbor.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Arbor configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 arbor config get output.glyphs\n\
            \x20 arbor config list\n\
            \x20 arbor config path"
    )]
    Config(ConfigCommands),
}

// ── tree ──────────────────────────────────────────────────────────────────────

/// Arguments for `arbor tree`.
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Directory to draw.
    #[arg(value_name = "PATH", default_value = ".", help = "Directory to visualize")]
    pub path: PathBuf,

    /// Use ASCII connectors instead of box drawing.
    #[arg(long = "ascii", help = "Draw with ASCII connectors")]
    pub ascii: bool,

    /// Drop the directory/file icons.
    #[arg(long = "no-icons", help = "Do not print directory/file icons")]
    pub no_icons: bool,

    /// Print directory and file counts after the tree.
    #[arg(short = 's', long = "summary", help = "Print a count summary")]
    pub summary: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `arbor init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `arbor completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `arbor config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.glyphs`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_tree_command() {
        let cli = Cli::parse_from(["arbor", "tree", "/tmp", "--ascii"]);
        match cli.command {
            Commands::Tree(args) => {
                assert_eq!(args.path, PathBuf::from("/tmp"));
                assert!(args.ascii);
                assert!(!args.no_icons);
            }
            other => panic!("expected Tree command, got {other:?}"),
        }
    }

    #[test]
    fn tree_path_defaults_to_cwd() {
        let cli = Cli::parse_from(["arbor", "t"]);
        if let Commands::Tree(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("."));
        } else {
            panic!("expected Tree command");
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["arbor", "tree", ".", "-vv", "--output-format", "json"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["arbor", "--quiet", "--verbose", "tree"]);
        assert!(result.is_err());
    }
}
