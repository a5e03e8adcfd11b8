use crate::UserId;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A person chatting with the assistant. Created once per username and never
/// modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}
