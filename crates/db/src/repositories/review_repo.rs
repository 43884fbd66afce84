//! Repository for the `reviews` table.

use gameportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "review_id, user_id, game_id, rating, review_text, created_at, is_approved";

/// Provides operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a review written by `user_id`. New reviews are auto-approved.
    ///
    /// A second review for the same (user, game) pair violates
    /// `uq_reviews_user_game`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateReview,
    ) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (user_id, game_id, rating, review_text)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(user_id)
            .bind(input.game_id)
            .bind(input.rating)
            .bind(&input.review_text)
            .fetch_one(pool)
            .await
    }

    /// Find a review by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE review_id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the approved reviews of a game, oldest first.
    pub async fn list_approved_for_game(
        pool: &PgPool,
        game_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE game_id = $1 AND is_approved = TRUE
             ORDER BY review_id"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(game_id)
            .fetch_all(pool)
            .await
    }

    /// List every review written by a user, approved or not.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE user_id = $1 ORDER BY review_id");
        sqlx::query_as::<_, Review>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Set the approval flag. There is no moderation endpoint; this backs
    /// external moderation tooling.
    pub async fn set_approved(
        pool: &PgPool,
        id: DbId,
        is_approved: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE reviews SET is_approved = $2 WHERE review_id = $1")
            .bind(id)
            .bind(is_approved)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a review. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE review_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
