//! List command implementation
//!
//! Lists available items grouped by type, with descriptions.

use console::Style;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::registry::{ItemType, Registry};

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    let registry = Registry::builtin();

    let types: Vec<ItemType> = match args.item_type {
        Some(ref value) => match ItemType::parse_filter(value) {
            Some(item_type) => vec![item_type],
            None => {
                eprintln!("Unknown type: {}", value);
                eprintln!("Supported types: agents, skills, rules");
                std::process::exit(1);
            }
        },
        None => ItemType::ALL.to_vec(),
    };

    list_items(&registry, &types);

    Ok(())
}

/// Print items of the given types, grouped with section headers
fn list_items(registry: &Registry, types: &[ItemType]) {
    for item_type in types {
        let items = registry.items_by_type(*item_type);
        if items.is_empty() {
            continue;
        }

        println!(
            "{}",
            Style::new()
                .bold()
                .cyan()
                .apply_to(item_type.plural().to_uppercase())
        );

        for item in items {
            println!(
                "  {:<20} {}",
                Style::new().bold().apply_to(&item.name),
                Style::new().dim().apply_to(&item.description)
            );
        }

        println!();
    }

    let total = registry.len();
    let items_label = if total == 1 { "item" } else { "items" };
    println!("{} {} available", total, items_label);
}
