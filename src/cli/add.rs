use clap::Parser;

/// Arguments for the add command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Add items by name:\n    dotclaude add frontend tdd workflow\n\n\
                   Add every available item:\n    dotclaude add --all\n\n\
                   Pick items interactively:\n    dotclaude add")]
pub struct AddArgs {
    /// Items to add (e.g., frontend tdd workflow). If not provided, opens an
    /// interactive selection menu
    pub items: Vec<String>,

    /// Add all available items
    #[arg(long, short = 'a')]
    pub all: bool,
}
