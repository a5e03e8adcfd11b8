//! The store facade: the only entry point other components use to reach
//! persisted users, profiles and plans.

use crate::{
    DbError, PlanRepository, ProfileRepository, Result as DbErrorResult, StoreOptions,
    UserRepository, connect, run_migrations,
};

use fit_core::{
    DietPlan, Meal, PlanEntry, PlanId, Profile, ProfileAttributes, SavedPlan, User, UserId,
    WorkoutDay, WorkoutPlan, normalize_username, validate_plan_name,
};

use log::info;
use sqlx::SqlitePool;

/// Profile & plan persistence over a shared connection pool.
///
/// Cloning is cheap and clones share the pool, so one store can serve many
/// chat sessions concurrently. Every operation is a single atomic statement
/// (or, for user creation, a conflict-tolerant insert followed by a read) and
/// failures are reported once, without retries.
#[derive(Clone)]
pub struct PlanStore {
    pool: SqlitePool,
}

impl PlanStore {
    /// Wrap an already migrated pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to the database and bring its schema up to date
    pub async fn open(options: &StoreOptions) -> DbErrorResult<Self> {
        let pool = connect(options).await?;
        run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database connection closed");
    }

    // ---------------------------------------------------------------------- //
    // Users
    // ---------------------------------------------------------------------- //

    /// Look up the user by username, creating it when absent. Returns the
    /// user id and `true` when this call created the row.
    pub async fn get_or_create_user(&self, username: &str) -> DbErrorResult<(UserId, bool)> {
        let username = normalize_username(username)?;
        let (user, created) = UserRepository::get_or_create(&self.pool, &username).await?;

        Ok((user.id, created))
    }

    /// Read-only lookup; never creates the user.
    pub async fn find_user(&self, username: &str) -> DbErrorResult<Option<User>> {
        let username = normalize_username(username)?;
        UserRepository::find_by_username(&self.pool, &username).await
    }

    // ---------------------------------------------------------------------- //
    // Profiles
    // ---------------------------------------------------------------------- //

    /// Replace the user's profile document. The previous document is
    /// superseded as a whole, attributes are not merged.
    pub async fn save_profile(
        &self,
        user_id: UserId,
        attributes: &ProfileAttributes,
    ) -> DbErrorResult<Profile> {
        ProfileRepository::upsert(&self.pool, user_id, attributes).await
    }

    /// `None` when the user has never saved a profile
    pub async fn get_profile(&self, user_id: UserId) -> DbErrorResult<Option<Profile>> {
        ProfileRepository::find_by_user(&self.pool, user_id).await
    }

    // ---------------------------------------------------------------------- //
    // Plans
    // ---------------------------------------------------------------------- //

    /// Append a plan of any kind to the user's history
    pub async fn save_plan<P: PlanEntry>(
        &self,
        user_id: UserId,
        name: &str,
        entries: &[P],
    ) -> DbErrorResult<PlanId> {
        let name = validate_plan_name(name)?;
        let plan = PlanRepository::create(&self.pool, user_id, &name, entries).await?;

        Ok(plan.id)
    }

    /// All plans of one kind for the user, oldest first
    pub async fn get_plans<P: PlanEntry>(&self, user_id: UserId) -> DbErrorResult<Vec<SavedPlan<P>>> {
        PlanRepository::list_by_user(&self.pool, user_id).await
    }

    /// A single plan by id, `NotFound` when no plan of that kind has the id
    pub async fn get_plan<P: PlanEntry>(&self, plan_id: PlanId) -> DbErrorResult<SavedPlan<P>> {
        PlanRepository::find_by_id(&self.pool, plan_id)
            .await?
            .ok_or_else(|| DbError::not_found(P::KIND.as_str(), plan_id))
    }

    pub async fn save_workout_plan(
        &self,
        user_id: UserId,
        name: &str,
        days: &[WorkoutDay],
    ) -> DbErrorResult<PlanId> {
        self.save_plan(user_id, name, days).await
    }

    pub async fn save_diet_plan(
        &self,
        user_id: UserId,
        name: &str,
        meals: &[Meal],
    ) -> DbErrorResult<PlanId> {
        self.save_plan(user_id, name, meals).await
    }

    pub async fn get_workout_plans(&self, user_id: UserId) -> DbErrorResult<Vec<WorkoutPlan>> {
        self.get_plans(user_id).await
    }

    pub async fn get_diet_plans(&self, user_id: UserId) -> DbErrorResult<Vec<DietPlan>> {
        self.get_plans(user_id).await
    }
}
