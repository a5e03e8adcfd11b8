//! Input validation shared by every entry point into the store.

use crate::{CoreError, Result as CoreErrorResult};

/// Matches the `VARCHAR(100)` width the username column has always had
pub const MAX_USERNAME_LENGTH: usize = 100;
pub const MAX_PLAN_NAME_LENGTH: usize = 200;

/// Validate a username and return its canonical form.
///
/// Surrounding whitespace is not significant, so `" alice "` and `"alice"`
/// resolve to the same user.
#[track_caller]
pub fn normalize_username(username: &str) -> CoreErrorResult<String> {
    let trimmed = username.trim();

    if trimmed.is_empty() {
        return Err(CoreError::validation("username cannot be empty"));
    }

    if trimmed.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::validation(format!(
            "username exceeds maximum length ({})",
            MAX_USERNAME_LENGTH
        )));
    }

    if trimmed.chars().any(char::is_control) {
        return Err(CoreError::validation(
            "username cannot contain control characters",
        ));
    }

    Ok(trimmed.to_string())
}

/// Validate a plan display name and return it trimmed.
#[track_caller]
pub fn validate_plan_name(name: &str) -> CoreErrorResult<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(CoreError::validation("plan name cannot be empty"));
    }

    if trimmed.chars().count() > MAX_PLAN_NAME_LENGTH {
        return Err(CoreError::validation(format!(
            "plan name exceeds maximum length ({})",
            MAX_PLAN_NAME_LENGTH
        )));
    }

    Ok(trimmed.to_string())
}
