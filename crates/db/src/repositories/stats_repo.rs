//! Reporting gateway: parameterized calls into the aggregate SQL functions
//! and dashboard views.
//!
//! Nothing here aggregates in Rust. Each method is a single statement whose
//! result shape is fixed by the database object it reads.

use gameportal_core::types::{Date, DbId};
use sqlx::PgPool;

use crate::models::stats::{
    GameRatingRow, PopularGameRow, TopPlayer, UserActivityEntry, UserStatsRow,
};

/// Provides read-only access to precomputed aggregates.
pub struct StatsRepo;

impl StatsRepo {
    /// `get_game_rating(game_id)`. `None` when the game does not exist or
    /// has no approved reviews.
    pub async fn game_rating(pool: &PgPool, game_id: DbId) -> Result<Option<f64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<f64>>("SELECT get_game_rating($1)::FLOAT8")
            .bind(game_id)
            .fetch_one(pool)
            .await
    }

    /// `get_user_total_hours(user_id)`. `None` when the user has no progress
    /// records (or does not exist).
    pub async fn user_total_hours(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i64>>("SELECT get_user_total_hours($1)")
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// `get_top_players_by_genre(genre_name)`, highest hours first.
    pub async fn top_players_by_genre(
        pool: &PgPool,
        genre_name: &str,
    ) -> Result<Vec<TopPlayer>, sqlx::Error> {
        sqlx::query_as::<_, TopPlayer>(
            "SELECT user_id, username, total_hours FROM get_top_players_by_genre($1)",
        )
        .bind(genre_name)
        .fetch_all(pool)
        .await
    }

    /// `get_user_activity(start, end)`, both bounds inclusive.
    pub async fn user_activity(
        pool: &PgPool,
        start: Date,
        end: Date,
    ) -> Result<Vec<UserActivityEntry>, sqlx::Error> {
        sqlx::query_as::<_, UserActivityEntry>(
            "SELECT user_id, username, activity_date, hours_played, reviews_written
             FROM get_user_activity($1, $2)",
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
    }

    /// Snapshot of `game_ratings_view`.
    pub async fn game_ratings(pool: &PgPool) -> Result<Vec<GameRatingRow>, sqlx::Error> {
        sqlx::query_as::<_, GameRatingRow>(
            "SELECT game_id, title, release_date, average_rating, review_count
             FROM game_ratings_view",
        )
        .fetch_all(pool)
        .await
    }

    /// Snapshot of `user_stats_view`.
    pub async fn user_stats(pool: &PgPool) -> Result<Vec<UserStatsRow>, sqlx::Error> {
        sqlx::query_as::<_, UserStatsRow>(
            "SELECT user_id, username, registration_date, total_games, completed_games, total_hours
             FROM user_stats_view",
        )
        .fetch_all(pool)
        .await
    }

    /// Snapshot of `popular_games_view`.
    pub async fn popular_games(pool: &PgPool) -> Result<Vec<PopularGameRow>, sqlx::Error> {
        sqlx::query_as::<_, PopularGameRow>(
            "SELECT game_id, title, players_count, average_rating FROM popular_games_view",
        )
        .fetch_all(pool)
        .await
    }
}
