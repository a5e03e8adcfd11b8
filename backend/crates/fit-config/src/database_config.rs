use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ACQUIRE_TIMEOUT_SECS, DEFAULT_BUSY_TIMEOUT_SECS,
    DEFAULT_DATABASE_FILENAME, DEFAULT_MAX_CONNECTIONS, MAX_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file, relative to the config directory
    pub path: String,
    pub max_connections: u32,
    pub busy_timeout_secs: u64,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
            acquire_timeout_secs: DEFAULT_ACQUIRE_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Keep the database inside the config directory
        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path cannot be empty"));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if self.max_connections == 0 || self.max_connections > MAX_MAX_CONNECTIONS {
            return Err(ConfigError::database(format!(
                "database.max_connections must be 1-{}, got {}",
                MAX_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if self.busy_timeout_secs == 0 {
            return Err(ConfigError::database(
                "database.busy_timeout_secs must be greater than 0",
            ));
        }

        if self.acquire_timeout_secs == 0 {
            return Err(ConfigError::database(
                "database.acquire_timeout_secs must be greater than 0",
            ));
        }

        Ok(())
    }
}
