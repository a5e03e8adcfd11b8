use crate::{
    plan_commands::PlanCommands, profile_commands::ProfileCommands, user_commands::UserCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database schema and seed the test user
    InitDb,

    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Profile operations
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },

    /// Workout plan operations
    Workout {
        #[command(subcommand)]
        action: PlanCommands,
    },

    /// Diet plan operations
    Diet {
        #[command(subcommand)]
        action: PlanCommands,
    },
}
