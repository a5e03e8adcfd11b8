//! Saved plan records - immutable snapshots of generated plans.

use crate::{Meal, PlanId, PlanKind, Result as CoreErrorResult, UserId, WorkoutDay};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// An entry type that can make up a plan document.
pub trait PlanEntry: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    const KIND: PlanKind;

    /// Reject entries whose JSON form would not read back as the same entry
    fn validate(&self) -> CoreErrorResult<()> {
        Ok(())
    }
}

/// A plan as persisted by the store. Records are append-only: once saved
/// they are never updated, and several may share a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound = "E: PlanEntry")]
pub struct SavedPlan<E: PlanEntry> {
    pub id: PlanId,
    pub user_id: UserId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Ordered plan document (days or meals)
    pub entries: Vec<E>,
}

impl<E: PlanEntry> SavedPlan<E> {
    pub fn kind(&self) -> PlanKind {
        E::KIND
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub type WorkoutPlan = SavedPlan<WorkoutDay>;
pub type DietPlan = SavedPlan<Meal>;
