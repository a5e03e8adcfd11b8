use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Print the user's current profile (null when none was saved)
    Get {
        /// Username
        username: String,
    },
    /// Replace the user's profile with a JSON object
    Set {
        /// Username
        username: String,

        /// Profile document, e.g. '{"age": 30, "goals": "lose weight"}'
        #[arg(long)]
        json: String,
    },
}
