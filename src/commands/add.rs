//! Add command implementation
//!
//! Resolves the requested items (by name, --all, or interactive selection),
//! then installs them one at a time. A failed item is reported and the batch
//! continues; unknown item names abort before anything is installed.

use console::Style;
use std::path::PathBuf;

use crate::cli::AddArgs;
use crate::commands::init::resolve_project;
use crate::commands::menu::select_items_interactively;
use crate::error::{DotclaudeError, Result};
use crate::installer::{InstallReport, Installer};
use crate::progress::ProgressDisplay;
use crate::project::Project;
use crate::registry::{ContentItem, Registry};
use crate::remote::GithubFetcher;

/// Run add command
pub fn run(project_dir: Option<PathBuf>, args: AddArgs) -> Result<()> {
    let project = resolve_project(project_dir)?;
    let registry = Registry::builtin();

    project.ensure_claude_dir()?;

    let items = resolve_items(&registry, &project, &args)?;

    if items.is_empty() {
        println!("No items selected.");
        return Ok(());
    }

    let fetcher = GithubFetcher::new()?;
    let installer = Installer::new(&fetcher, &project);

    println!("Installing {} component(s)...", items.len());

    let progress = ProgressDisplay::new(items.len() as u64);
    let report = installer.install_batch_with(&items, |name, index, total| {
        progress.update_item(name, index + 1, total);
        progress.set_position(index as u64);
    });
    progress.finish();

    print_summary(&report);

    Ok(())
}

/// Determine which items to install from the command arguments
fn resolve_items(
    registry: &Registry,
    project: &Project,
    args: &AddArgs,
) -> Result<Vec<ContentItem>> {
    if args.all {
        return Ok(registry.items().to_vec());
    }

    if !args.items.is_empty() {
        let mut items = Vec::new();
        for name in &args.items {
            let item = registry
                .item_by_name(name)
                .ok_or_else(|| DotclaudeError::ItemNotFound { name: name.clone() })?;
            items.push(item.clone());
        }
        return Ok(items);
    }

    select_items_interactively(registry, project)
}

/// Print the batch summary and any per-item errors
fn print_summary(report: &InstallReport) {
    if report.is_complete_success() {
        let plural = if report.installed == 1 { "" } else { "s" };
        println!("Installed {} component{}", report.installed, plural);
    } else {
        println!(
            "Installed {}/{} components",
            report.installed, report.attempted
        );
        for error in &report.errors {
            eprintln!("{} {}", Style::new().red().apply_to("error:"), error);
        }
    }

    if !report.installed_names.is_empty() {
        println!();
        println!("{}", Style::new().bold().apply_to("Added to .claude/:"));
        for name in &report.installed_names {
            println!("  - {}", name);
        }
        println!("Imports added to CLAUDE.md");
    }
}
