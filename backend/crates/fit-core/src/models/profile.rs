//! Profile entity - the open-ended attribute bag kept for each user.

use crate::UserId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Caller-defined profile attributes (age, weight, goals, ...).
pub type ProfileAttributes = Map<String, Value>;

/// The current profile document of a user. Saving a new one replaces the
/// whole document; attributes are never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: UserId,
    pub attributes: ProfileAttributes,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Look up a single attribute
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }
}
