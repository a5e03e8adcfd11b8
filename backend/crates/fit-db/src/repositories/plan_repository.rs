use crate::repositories::timestamp;
use crate::{DbError, Result as DbErrorResult};

use fit_core::{CoreError, PlanEntry, PlanId, PlanKind, SavedPlan, UserId};

use chrono::Utc;
use log::{debug, info};
use sqlx::FromRow;

#[derive(FromRow)]
struct PlanRow {
    id: i64,
    user_id: i64,
    name: String,
    payload: String,
    created_at: i64,
}

impl PlanRow {
    fn into_plan<P: PlanEntry>(self) -> DbErrorResult<SavedPlan<P>> {
        let entries: Vec<P> = serde_json::from_str(&self.payload).map_err(|e| {
            DbError::serialization(format!(
                "{} plan {} has an unreadable payload: {}",
                P::KIND,
                self.id,
                e
            ))
        })?;

        Ok(SavedPlan {
            id: PlanId(self.id),
            user_id: UserId(self.user_id),
            name: self.name,
            created_at: timestamp("created_at", self.created_at)?,
            entries,
        })
    }
}

/// Serialize a plan document and make sure it decodes back into entries.
/// Returns the stored text and the entries exactly as they will be read.
fn encode_document<P: PlanEntry>(name: &str, entries: &[P]) -> DbErrorResult<(String, Vec<P>)> {
    for entry in entries {
        entry.validate()?;
    }

    let document = serde_json::to_value(entries)
        .map_err(|e| DbError::serialization(format!("{} plan '{}': {}", P::KIND, name, e)))?;

    let decoded: Vec<P> = serde_json::from_value(document.clone()).map_err(|e| {
        DbError::from(CoreError::validation(format!(
            "{} plan '{}' would not read back: {}",
            P::KIND,
            name,
            e
        )))
    })?;

    Ok((document.to_string(), decoded))
}

/// Table holding the history of one plan kind
fn table(kind: PlanKind) -> &'static str {
    match kind {
        PlanKind::Workout => "workout_plans",
        PlanKind::Diet => "diet_plans",
    }
}

/// Append-only storage for workout and diet plans. The entry type selects
/// the table, so `PlanRepository::list_by_user::<WorkoutDay, _>` reads
/// workout plans and the `Meal` variant reads diet plans.
pub struct PlanRepository;

impl PlanRepository {
    /// Insert a new plan record. Existing plans, including ones with the same
    /// name, are left untouched.
    ///
    /// The document is checked to read back before it is written, and nothing
    /// after the INSERT can fail, so an `Err` always means no row was added.
    pub async fn create<'e, P, E>(
        executor: E,
        user_id: UserId,
        name: &str,
        entries: &[P],
    ) -> DbErrorResult<SavedPlan<P>>
    where
        P: PlanEntry,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let (payload, entries) = encode_document(name, entries)?;
        let created_at = Utc::now().timestamp();
        let created = timestamp("created_at", created_at)?;

        let sql = format!(
            r#"
              INSERT INTO {} (user_id, name, payload, created_at)
              VALUES (?, ?, ?, ?)
              RETURNING id
              "#,
            table(P::KIND)
        );

        let id = sqlx::query_scalar::<_, i64>(&sql)
            .bind(user_id.0)
            .bind(name)
            .bind(&payload)
            .bind(created_at)
            .fetch_one(executor)
            .await
            .map_err(|e| DbError::from_user_write(e, user_id))?;

        info!(
            "Saved {} plan '{}' (id {}) for user_id: {}",
            P::KIND,
            name,
            id,
            user_id
        );

        Ok(SavedPlan {
            id: PlanId(id),
            user_id,
            name: name.to_string(),
            created_at: created,
            entries,
        })
    }

    /// All plans of the user, oldest first. Ids only grow, so id order is
    /// save order regardless of the writers' clocks.
    pub async fn list_by_user<'e, P, E>(
        executor: E,
        user_id: UserId,
    ) -> DbErrorResult<Vec<SavedPlan<P>>>
    where
        P: PlanEntry,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            r#"
              SELECT id, user_id, name, payload, created_at
              FROM {}
              WHERE user_id = ?
              ORDER BY id ASC
              "#,
            table(P::KIND)
        );

        let rows = sqlx::query_as::<_, PlanRow>(&sql)
            .bind(user_id.0)
            .fetch_all(executor)
            .await?;

        debug!(
            "Retrieved {} {} plans for user_id: {}",
            rows.len(),
            P::KIND,
            user_id
        );

        rows.into_iter().map(PlanRow::into_plan::<P>).collect()
    }

    pub async fn find_by_id<'e, P, E>(
        executor: E,
        id: PlanId,
    ) -> DbErrorResult<Option<SavedPlan<P>>>
    where
        P: PlanEntry,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            r#"
              SELECT id, user_id, name, payload, created_at
              FROM {}
              WHERE id = ?
              "#,
            table(P::KIND)
        );

        let row = sqlx::query_as::<_, PlanRow>(&sql)
            .bind(id.0)
            .fetch_optional(executor)
            .await?;

        row.map(PlanRow::into_plan::<P>).transpose()
    }

    pub async fn count_by_user<'e, P, E>(executor: E, user_id: UserId) -> DbErrorResult<i64>
    where
        P: PlanEntry,
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE user_id = ?", table(P::KIND));

        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(user_id.0)
            .fetch_one(executor)
            .await?;

        Ok(count)
    }
}
