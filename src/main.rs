//! dotclaude - Claude Code content installer
//!
//! A command line tool for adding curated agents, skills, and rules from the
//! claude-kit repository to a project's .claude/ directory, with import
//! references recorded in CLAUDE.md.

use clap::Parser;

mod cli;
mod commands;
mod error;
mod installer;
mod progress;
mod project;
mod registry;
mod remote;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => commands::init::run(cli.project),
        Commands::Add(args) => commands::add::run(cli.project, args),
        Commands::List(args) => commands::list::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
