//! Repository for the `user_game_progress` table.

use gameportal_core::patch;
use gameportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::progress::{CreateProgress, Progress, UpdateProgress};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "progress_id, user_id, game_id, status, hours_played, last_played, last_updated";

/// Provides CRUD operations for play-progress records.
pub struct ProgressRepo;

impl ProgressRepo {
    /// Insert a progress record for `user_id`.
    ///
    /// If `hours_played` is `None` in the input, defaults to 0. A second
    /// record for the same (user, game) pair violates
    /// `uq_user_game_progress_user_game`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateProgress,
    ) -> Result<Progress, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_game_progress (user_id, game_id, status, hours_played, last_played)
             VALUES ($1, $2, $3, COALESCE($4, 0), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(user_id)
            .bind(input.game_id)
            .bind(&input.status)
            .bind(input.hours_played)
            .bind(input.last_played)
            .fetch_one(pool)
            .await
    }

    /// Find a progress record by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Progress>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM user_game_progress WHERE progress_id = $1");
        sqlx::query_as::<_, Progress>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every progress record of a user.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Progress>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_game_progress WHERE user_id = $1 ORDER BY progress_id"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a progress record. Only provided fields in `input` are applied;
    /// `last_updated` is refreshed by trigger.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProgress,
    ) -> Result<Option<Progress>, sqlx::Error> {
        let (last_played_provided, last_played) = patch::split(&input.last_played);
        let query = format!(
            "UPDATE user_game_progress SET
                status = COALESCE($2, status),
                hours_played = COALESCE($3, hours_played),
                last_played = CASE WHEN $4 THEN $5 ELSE last_played END
             WHERE progress_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Progress>(&query)
            .bind(id)
            .bind(&input.status)
            .bind(input.hours_played)
            .bind(last_played_provided)
            .bind(last_played.copied())
            .fetch_optional(pool)
            .await
    }

    /// Delete a progress record. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_game_progress WHERE progress_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
