//! Repository for the `genres` table and the `game_genres` link table.

use gameportal_core::types::DbId;
use sqlx::PgPool;

use crate::models::genre::{CreateGenre, Genre};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "genre_id, name, description";

/// Provides operations for genres and their links to games.
pub struct GenreRepo;

impl GenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGenre) -> Result<Genre, sqlx::Error> {
        let query = format!(
            "INSERT INTO genres (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Genre>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE genre_id = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a genre by its unique name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres WHERE name = $1");
        sqlx::query_as::<_, Genre>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List all genres ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM genres ORDER BY name");
        sqlx::query_as::<_, Genre>(&query).fetch_all(pool).await
    }

    /// Link a genre to a game. Linking an already-linked pair is a no-op.
    pub async fn attach_to_game(
        pool: &PgPool,
        game_id: DbId,
        genre_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO game_genres (game_id, genre_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(game_id)
        .bind(genre_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a genre link. Returns `true` if a link existed.
    pub async fn detach_from_game(
        pool: &PgPool,
        game_id: DbId,
        genre_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM game_genres WHERE game_id = $1 AND genre_id = $2")
            .bind(game_id)
            .bind(genre_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the genres linked to a game, ordered by name.
    pub async fn list_for_game(pool: &PgPool, game_id: DbId) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT g.genre_id, g.name, g.description
             FROM genres g
             JOIN game_genres gg ON gg.genre_id = g.genre_id
             WHERE gg.game_id = $1
             ORDER BY g.name",
        )
        .bind(game_id)
        .fetch_all(pool)
        .await
    }
}
