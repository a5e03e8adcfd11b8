use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "fit")]
#[command(about = "Fitness plan store: users, profiles, workout and diet plans")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
