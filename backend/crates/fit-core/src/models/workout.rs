//! Workout plan document entries.

use crate::{CoreError, PlanEntry, PlanKind, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One exercise of a workout day.
///
/// Only the name is structural; everything else the model produced
/// (`sets`, `reps`, `rest_period`, ...) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Exercise {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            details: Map::new(),
        }
    }

    /// Attach a descriptor such as `sets` or `rest_period`
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Details share one JSON object with `name`, so they cannot use that key.
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.details.contains_key("name") {
            return Err(CoreError::validation(format!(
                "exercise '{}' has a detail named 'name'",
                self.name
            )));
        }

        Ok(())
    }
}

/// A single day of a workout plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: String,
    pub exercises: Vec<Exercise>,
    pub duration: String,
    pub intensity: String,
}

impl WorkoutDay {
    /// Name used when a workout plan is saved without an explicit one,
    /// e.g. "5-Day Workout Plan".
    pub fn default_plan_name(days: usize) -> String {
        format!("{}-Day Workout Plan", days)
    }
}

impl PlanEntry for WorkoutDay {
    const KIND: PlanKind = PlanKind::Workout;

    fn validate(&self) -> CoreErrorResult<()> {
        self.exercises.iter().try_for_each(Exercise::validate)
    }
}
