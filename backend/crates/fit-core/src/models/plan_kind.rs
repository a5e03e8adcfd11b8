use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The two families of generated plans the store keeps history for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKind {
    Workout,
    Diet,
}

impl PlanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Diet => "diet",
        }
    }
}

impl FromStr for PlanKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "workout" => Ok(Self::Workout),
            "diet" => Ok(Self::Diet),
            _ => Err(CoreError::InvalidPlanKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for PlanKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
