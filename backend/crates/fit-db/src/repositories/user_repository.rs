use crate::repositories::timestamp;
use crate::{DbError, Result as DbErrorResult};

use fit_core::{User, UserId};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{debug, info};
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct UserRow {
    id: i64,
    username: String,
    created_at: i64,
}

impl UserRow {
    fn into_user(self) -> DbErrorResult<User> {
        Ok(User {
            id: UserId(self.id),
            username: self.username,
            created_at: timestamp("users.created_at", self.created_at)?,
        })
    }
}

pub struct UserRepository;

impl UserRepository {
    /// Insert the user unless the username is taken, then return whichever
    /// row now owns the username and whether this call created it.
    ///
    /// The UNIQUE constraint on `username` arbitrates concurrent callers.
    pub async fn get_or_create(pool: &SqlitePool, username: &str) -> DbErrorResult<(User, bool)> {
        let created_at = Utc::now().timestamp();

        let inserted = sqlx::query_as::<_, UserRow>(
            r#"
              INSERT INTO users (username, created_at)
              VALUES (?, ?)
              ON CONFLICT(username) DO NOTHING
              RETURNING id, username, created_at
              "#,
        )
        .bind(username)
        .bind(created_at)
        .fetch_optional(pool)
        .await?;

        if let Some(row) = inserted {
            let user = row.into_user()?;
            info!("Created new user: {} with ID: {}", user.username, user.id);
            return Ok((user, true));
        }

        match Self::find_by_username(pool, username).await? {
            Some(user) => {
                debug!("Found existing user: {}", user.username);
                Ok((user, false))
            }
            None => Err(DbError::Conflict {
                message: format!("username '{}' was claimed but cannot be read back", username),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    pub async fn find_by_username<'e, E>(
        executor: E,
        username: &str,
    ) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, username, created_at
              FROM users
              WHERE username = ?
              "#,
        )
        .bind(username)
        .fetch_optional(executor)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    pub async fn find_by_id<'e, E>(executor: E, id: UserId) -> DbErrorResult<Option<User>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, username, created_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.0)
        .fetch_optional(executor)
        .await?;

        row.map(UserRow::into_user).transpose()
    }
}
