use fit_core::{CoreError, UserId};

use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;
use thiserror::Error;

// SQLite primary result codes that mean the database itself is out of reach
const SQLITE_BUSY: i32 = 5;
const SQLITE_LOCKED: i32 = 6;
const SQLITE_CANTOPEN: i32 = 14;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("{entity} not found: {id} {location}")]
    NotFound {
        entity: &'static str,
        id: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Storage unavailable: {message} {location}")]
    StorageUnavailable {
        message: String,
        location: ErrorLocation,
    },

    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stored document could not be (de)serialized: {message} {location}")]
    Serialization {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        DbError::NotFound {
            entity,
            id: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn serialization(message: impl Into<String>) -> Self {
        DbError::Serialization {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the caller may reasonably retry once the database is back
    pub fn is_unavailable(&self) -> bool {
        matches!(self, DbError::StorageUnavailable { .. })
    }

    /// Map a failed write that references `users(id)`. A foreign-key
    /// violation there means the user does not exist.
    #[track_caller]
    pub(crate) fn from_user_write(source: sqlx::Error, user_id: UserId) -> Self {
        if let sqlx::Error::Database(ref db_err) = source
            && db_err.is_foreign_key_violation()
        {
            warn!("Rejected write for unknown user_id: {}", user_id);
            return DbError::not_found("user", user_id);
        }

        DbError::from(source)
    }
}

fn is_unavailable(source: &sqlx::Error) -> bool {
    match source {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => true,
        sqlx::Error::Database(db_err) => db_err
            .code()
            .and_then(|code| code.parse::<i32>().ok())
            // Extended result codes keep the primary code in the low byte
            .map(|code| matches!(code & 0xff, SQLITE_BUSY | SQLITE_LOCKED | SQLITE_CANTOPEN))
            .unwrap_or(false),
        _ => false,
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        if is_unavailable(&source) {
            return Self::StorageUnavailable {
                message: source.to_string(),
                location,
            };
        }

        if let sqlx::Error::Database(ref db_err) = source {
            if db_err.is_unique_violation() {
                return Self::Conflict {
                    message: db_err.message().to_string(),
                    location,
                };
            }

            if db_err.is_foreign_key_violation() {
                return Self::NotFound {
                    entity: "referenced row",
                    id: db_err.message().to_string(),
                    location,
                };
            }
        }

        Self::Sqlx { source, location }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: format!("Migration failed: {}", source),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    fn from(source: CoreError) -> Self {
        match source {
            CoreError::Validation { message, location } => Self::Validation { message, location },
            CoreError::InvalidPlanKind { value, location } => Self::Validation {
                message: format!("invalid plan kind: {}", value),
                location,
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
