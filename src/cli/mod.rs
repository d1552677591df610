//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add: Add command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod completions;
pub mod list;

pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use list::ListArgs;

/// dotclaude - Claude Code content installer
///
/// Add curated agents, skills, and rules to your project.
#[derive(Parser, Debug)]
#[command(
    name = "dotclaude",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Add curated Claude Code agents, skills, and rules to your project",
    long_about = "dotclaude copies curated agent, skill, and rule assets from the claude-kit \
                  repository into your project's .claude/ directory and records import \
                  references in CLAUDE.md.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  dotclaude init                  \x1b[90m# Create the .claude/ directory\x1b[0m\n   \
                  dotclaude add frontend tdd      \x1b[90m# Add items by name\x1b[0m\n   \
                  dotclaude add                   \x1b[90m# Pick items interactively\x1b[0m\n   \
                  dotclaude add --all             \x1b[90m# Add every available item\x1b[0m\n   \
                  dotclaude list --type rules     \x1b[90m# List available rules\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true, env = "DOTCLAUDE_PROJECT")]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize dotclaude in your project
    Init,

    /// Add agents, skills, or rules to your project
    Add(AddArgs),

    /// List available agents, skills, and rules
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_init() {
        let cli = Cli::try_parse_from(["dotclaude", "init"]).unwrap();
        assert!(matches!(cli.command, Commands::Init));
    }

    #[test]
    fn test_cli_parsing_list() {
        let cli = Cli::try_parse_from(["dotclaude", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["dotclaude", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli = Cli::try_parse_from(["dotclaude", "-p", "/tmp/project", "list"]).unwrap();
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["dotclaude", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "zsh");
            }
            _ => panic!("Expected Completions command"),
        }
    }
}
