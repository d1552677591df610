//! Interactive item selection for the add command

use inquire::MultiSelect;

use crate::error::Result;
use crate::project::Project;
use crate::registry::{ContentItem, Registry};

/// Select items to install interactively
///
/// Items already present in the project are marked but remain selectable;
/// reinstalling overwrites their files. Cancelling selects nothing.
pub fn select_items_interactively(
    registry: &Registry,
    project: &Project,
) -> Result<Vec<ContentItem>> {
    if registry.is_empty() {
        return Ok(vec![]);
    }

    // Single-line items: "[agent] backend (installed) - description".
    // Multi-line content breaks inquire's list layout.
    let options: Vec<String> = registry
        .items()
        .iter()
        .map(|item| {
            let installed = if project.file_exists(&item.remote_path) {
                " (installed)"
            } else {
                ""
            };
            format!(
                "[{}] {}{} - {}",
                item.item_type, item.name, installed, item.description
            )
        })
        .collect();

    println!();

    let selection = match MultiSelect::new("Select components to add", options.clone())
        .with_page_size(15)
        .with_help_message(
            "  ↑↓ navigate  space select  enter confirm  type to filter  q/esc cancel",
        )
        .prompt_skippable()?
    {
        Some(sel) => sel,
        None => return Ok(vec![]),
    };

    // Map display strings back to registry items by position
    let selected: Vec<ContentItem> = selection
        .iter()
        .filter_map(|display| {
            options
                .iter()
                .position(|o| o == display)
                .and_then(|idx| registry.items().get(idx))
                .cloned()
        })
        .collect();

    Ok(selected)
}
