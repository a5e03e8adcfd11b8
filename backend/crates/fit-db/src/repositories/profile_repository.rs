use crate::repositories::timestamp;
use crate::{DbError, Result as DbErrorResult};

use fit_core::{Profile, ProfileAttributes, UserId};

use chrono::Utc;
use log::{debug, info};
use sqlx::FromRow;

#[derive(FromRow)]
struct ProfileRow {
    user_id: i64,
    attributes: String,
    updated_at: i64,
}

impl ProfileRow {
    fn into_profile(self) -> DbErrorResult<Profile> {
        let attributes: ProfileAttributes =
            serde_json::from_str(&self.attributes).map_err(|e| {
                DbError::serialization(format!(
                    "profile of user {} is not a JSON object: {}",
                    self.user_id, e
                ))
            })?;

        Ok(Profile {
            user_id: UserId(self.user_id),
            attributes,
            updated_at: timestamp("profiles.updated_at", self.updated_at)?,
        })
    }
}

pub struct ProfileRepository;

impl ProfileRepository {
    /// Replace the user's profile document, inserting it on first save.
    pub async fn upsert<'e, E>(
        executor: E,
        user_id: UserId,
        attributes: &ProfileAttributes,
    ) -> DbErrorResult<Profile>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let document = serde_json::to_string(attributes)
            .map_err(|e| DbError::serialization(format!("profile attributes: {}", e)))?;
        let updated_at = Utc::now().timestamp();

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              INSERT INTO profiles (user_id, attributes, updated_at)
              VALUES (?, ?, ?)
              ON CONFLICT(user_id) DO UPDATE SET
                  attributes = excluded.attributes,
                  updated_at = excluded.updated_at
              RETURNING user_id, attributes, updated_at
              "#,
        )
        .bind(user_id.0)
        .bind(&document)
        .bind(updated_at)
        .fetch_one(executor)
        .await
        .map_err(|e| DbError::from_user_write(e, user_id))?;

        info!("Saved profile for user_id: {}", user_id);

        row.into_profile()
    }

    pub async fn find_by_user<'e, E>(executor: E, user_id: UserId) -> DbErrorResult<Option<Profile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              SELECT user_id, attributes, updated_at
              FROM profiles
              WHERE user_id = ?
              "#,
        )
        .bind(user_id.0)
        .fetch_optional(executor)
        .await?;

        match row {
            Some(row) => {
                debug!("Retrieved profile for user_id: {}", user_id);
                row.into_profile().map(Some)
            }
            None => {
                debug!("No profile found for user_id: {}", user_id);
                Ok(None)
            }
        }
    }
}
