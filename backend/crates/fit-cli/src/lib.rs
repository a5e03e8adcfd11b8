//! fit - operator CLI for the fitness plan store
//!
//! Every command prints a single JSON document on stdout. Logs and errors go
//! to stderr.
//!
//! # Examples
//!
//! ```bash
//! # Create the schema and the seeded test user
//! fit init-db
//!
//! # Replace a profile
//! fit profile set alice --json '{"age": 30, "goals": "build strength"}'
//!
//! # Save a workout plan from a file, then list the history
//! fit workout save alice --name "Week 1" --file week1.json
//! fit workout list alice --pretty
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod plan_commands;
pub mod profile_commands;
pub mod runner;
pub mod user_commands;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliErrorResult};
pub use runner::{TEST_USERNAME, execute, store_options};

use fit_db::PlanStore;

use log::info;
use serde_json::Value;

/// Load configuration, start logging, open the store and run the command.
pub async fn run(cli: Cli) -> CliErrorResult<Value> {
    let config = fit_config::Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting fit v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let options = store_options(&config)?;
    info!("Opening database: {}", options.path.display());
    let store = PlanStore::open(&options).await?;

    let result = execute(&store, cli.command).await;
    store.close().await;

    result
}
