use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List all available items:\n    dotclaude list\n\n\
                  List only rules:\n    dotclaude list --type rules")]
pub struct ListArgs {
    /// Filter by type (agents, skills, rules)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub item_type: Option<String>,
}
