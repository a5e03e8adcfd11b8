//! Diet plan document entries.

use crate::{CoreError, PlanEntry, PlanKind, Result as CoreErrorResult};

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single meal of a diet plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    pub meal_type: String,
    pub foods: Vec<String>,
    pub calories: u32,
    /// Grams per macro-nutrient, keyed by name ("protein", "carbs", "fat", ...)
    pub macros: BTreeMap<String, f64>,
}

impl Meal {
    /// Name used when a diet plan is saved without an explicit one,
    /// e.g. "Diet Plan (2025-03-14)".
    pub fn default_plan_name(date: NaiveDate) -> String {
        format!("Diet Plan ({})", date.format("%Y-%m-%d"))
    }
}

impl PlanEntry for Meal {
    const KIND: PlanKind = PlanKind::Diet;

    /// JSON has no NaN or infinity; they would be stored as `null`.
    fn validate(&self) -> CoreErrorResult<()> {
        match self.macros.iter().find(|(_, grams)| !grams.is_finite()) {
            Some((name, grams)) => Err(CoreError::validation(format!(
                "{} meal has a non-finite '{}' macro: {}",
                self.meal_type, name, grams
            ))),
            None => Ok(()),
        }
    }
}
