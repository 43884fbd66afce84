//! Repository for the `games` table.

use gameportal_core::patch;
use gameportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::{CreateGame, Game, UpdateGame};

/// Column list shared across queries to avoid repetition.
///
/// `average_rating` is `NUMERIC(12,2)` in the store and read back as `FLOAT8`.
const COLUMNS: &str = "game_id, title, description, release_date, company_id, created_at, \
                       average_rating::FLOAT8 AS average_rating, review_count";

/// Provides CRUD and bulk-load operations for games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (title, description, release_date, company_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(input.company_id)
            .fetch_one(pool)
            .await
    }

    /// Insert many games in one transaction, skipping any whose title already
    /// exists (in the store or earlier in the same batch).
    ///
    /// Returns the number of rows actually inserted.
    pub async fn create_many(pool: &PgPool, inputs: &[CreateGame]) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for input in inputs {
            let result = sqlx::query(
                "INSERT INTO games (title, description, release_date, company_id)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (title) DO NOTHING",
            )
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.release_date)
            .bind(input.company_id)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }

    /// Find a game by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE game_id = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a game by its unique title (case-sensitive).
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE title = $1");
        sqlx::query_as::<_, Game>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// List games in primary-key order. `limit: None` returns every row.
    pub async fn list(
        pool: &PgPool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games ORDER BY game_id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Game>(&query)
            .bind(limit)
            .bind(offset.unwrap_or(0))
            .fetch_all(pool)
            .await
    }

    /// List all games owned by a company.
    pub async fn list_by_company(pool: &PgPool, company_id: DbId) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE company_id = $1 ORDER BY game_id");
        sqlx::query_as::<_, Game>(&query)
            .bind(company_id)
            .fetch_all(pool)
            .await
    }

    /// Update a game. Only provided fields in `input` are applied;
    /// `release_date` is cleared by an explicit `null`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGame,
    ) -> Result<Option<Game>, sqlx::Error> {
        let (release_provided, release_date) = patch::split(&input.release_date);
        let query = format!(
            "UPDATE games SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                release_date = CASE WHEN $4 THEN $5 ELSE release_date END,
                company_id = COALESCE($6, company_id)
             WHERE game_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(release_provided)
            .bind(release_date.copied())
            .bind(input.company_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a game. Its reviews, progress records and genre links cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE game_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
