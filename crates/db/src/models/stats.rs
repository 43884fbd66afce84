//! Row shapes returned by the reporting functions and dashboard views.
//!
//! These mirror the column lists of `get_top_players_by_genre`,
//! `get_user_activity`, `game_ratings_view`, `user_stats_view` and
//! `popular_games_view` exactly.

use gameportal_core::types::{Date, DbId};
use serde::Serialize;
use sqlx::FromRow;

/// One row of `get_top_players_by_genre`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct TopPlayer {
    pub user_id: DbId,
    pub username: String,
    pub total_hours: i64,
}

/// One row of `get_user_activity`: a single user on a single day.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct UserActivityEntry {
    pub user_id: DbId,
    pub username: String,
    pub activity_date: Date,
    pub hours_played: i64,
    pub reviews_written: i64,
}

/// One row of `game_ratings_view`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct GameRatingRow {
    pub game_id: DbId,
    pub title: String,
    pub release_date: Option<Date>,
    pub average_rating: f64,
    pub review_count: i32,
}

/// One row of `user_stats_view`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct UserStatsRow {
    pub user_id: DbId,
    pub username: String,
    pub registration_date: Date,
    pub total_games: i64,
    pub completed_games: i64,
    pub total_hours: i64,
}

/// One row of `popular_games_view`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PopularGameRow {
    pub game_id: DbId,
    pub title: String,
    pub players_count: i64,
    /// `None` when none of the game's reviews are approved.
    pub average_rating: Option<f64>,
}
