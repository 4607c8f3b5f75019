use clap::Parser;

use crate::commands::search::SearchArgs;

#[derive(Parser)]
#[command(
    name = "weekly-search",
    version,
    about = "Search tools from ruanyf/weekly GitHub issues"
)]
pub struct Cli {
    #[command(flatten)]
    pub search: SearchArgs,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
