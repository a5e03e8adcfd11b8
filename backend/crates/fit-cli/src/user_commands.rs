use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Get a user by username, creating it if needed
    Ensure {
        /// Username
        username: String,
    },
    /// Show an existing user
    Show {
        /// Username
        username: String,
    },
}
