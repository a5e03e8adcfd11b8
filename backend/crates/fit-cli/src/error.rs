use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] fit_config::ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] fit_db::DbError),

    #[error("Invalid input: {message} {location}")]
    InvalidInput {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl CliError {
    #[track_caller]
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(context: &str, err: serde_json::Error) -> Self {
        CliError::Json {
            message: format!("{}: {}", context, err),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
