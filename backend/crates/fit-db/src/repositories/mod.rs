pub mod plan_repository;
pub mod profile_repository;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

/// Convert a stored unix timestamp back into a `DateTime`
#[track_caller]
pub(crate) fn timestamp(column: &str, seconds: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(seconds, 0).ok_or_else(|| DbError::Serialization {
        message: format!("Invalid {} timestamp: {}", column, seconds),
        location: ErrorLocation::from(Location::caller()),
    })
}
