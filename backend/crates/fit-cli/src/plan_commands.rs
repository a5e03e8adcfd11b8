use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Save a plan document (JSON array of entries) for a user
    Save {
        /// Username
        username: String,

        /// Plan name (a dated or day-count default is used when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Path to the JSON plan document, or "-" for stdin
        #[arg(long)]
        file: PathBuf,
    },
    /// List all saved plans of a user, oldest first
    List {
        /// Username
        username: String,
    },
}
