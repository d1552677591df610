//! Init command implementation

use console::Style;
use std::path::PathBuf;

use crate::error::Result;
use crate::project::{CLAUDE_DIR, Project};

/// Run init command
pub fn run(project_dir: Option<PathBuf>) -> Result<()> {
    let project = resolve_project(project_dir)?;

    project.ensure_claude_dir()?;

    println!(
        "Created {} directory",
        Style::new().bold().apply_to(format!("{}/", CLAUDE_DIR))
    );
    println!("Run 'dotclaude add' to add components");

    Ok(())
}

/// Resolve the project from CLI argument or current directory
pub fn resolve_project(project_dir: Option<PathBuf>) -> Result<Project> {
    match project_dir {
        Some(path) => Ok(Project::new(path)),
        None => Project::from_current_dir(),
    }
}
