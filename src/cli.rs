use clap::{ArgAction, Args, Parser, Subcommand};

use crate::inbox::Filter;

#[derive(Debug, Parser)]
#[command(
    name = "postbox",
    version,
    about = "Unified inbox for mail, letters and packages"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Profile name to use"
    )]
    pub profile: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    List(ListArgs),
    Stats,
    Show(ShowArgs),
    Me,
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, value_enum, default_value_t = Filter::All, help = "Category or unread filter")]
    pub filter: Filter,
    #[arg(short = 's', long, help = "Case-insensitive text search")]
    pub search: Option<String>,
    #[arg(long, help = "Maximum items to print")]
    pub limit: Option<usize>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(help = "Inbox item id")]
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
    Set(ConfigSetArgs),
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    #[arg(long, help = "API key sent with every request")]
    pub api_key: Option<String>,
    #[arg(long, help = "Base URL of the mail api")]
    pub base_url: Option<String>,
    #[arg(long, help = "Header carrying the api key")]
    pub api_key_header: Option<String>,
}
