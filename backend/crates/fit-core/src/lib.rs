pub mod error;
pub mod models;
pub mod validation;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::diet::Meal;
pub use models::ids::{PlanId, UserId};
pub use models::plan_kind::PlanKind;
pub use models::profile::{Profile, ProfileAttributes};
pub use models::saved_plan::{DietPlan, PlanEntry, SavedPlan, WorkoutPlan};
pub use models::user::User;
pub use models::workout::{Exercise, WorkoutDay};
pub use validation::{
    MAX_PLAN_NAME_LENGTH, MAX_USERNAME_LENGTH, normalize_username, validate_plan_name,
};
