//! Reporting endpoints backed by the aggregate SQL functions.

use axum::extract::{Path, State};
use axum::Json;
use gameportal_core::reporting::validate_date_range;
use gameportal_core::types::{Date, DbId};
use gameportal_db::models::stats::{TopPlayer, UserActivityEntry};
use gameportal_db::repositories::StatsRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::query::ApiQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GameRatingResponse {
    pub rating: f64,
}

#[derive(Debug, Serialize)]
pub struct UserTotalHoursResponse {
    pub total_hours: i64,
}

/// Query parameters for `GET /stats/user-activity`. Both bounds are inclusive.
#[derive(Debug, Deserialize)]
pub struct UserActivityQuery {
    pub start_date: Date,
    pub end_date: Date,
}

/// GET /stats/game/{game_id}/rating
///
/// A missing game and a game without approved reviews both answer 404.
pub async fn game_rating(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<Json<GameRatingResponse>> {
    let rating = StatsRepo::game_rating(&state.pool, game_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Game not found or no approved reviews".to_string()))?;
    Ok(Json(GameRatingResponse { rating }))
}

/// GET /stats/user/{user_id}/total-hours
pub async fn user_total_hours(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<UserTotalHoursResponse>> {
    let total_hours = StatsRepo::user_total_hours(&state.pool, user_id)
        .await?
        .unwrap_or(0);
    Ok(Json(UserTotalHoursResponse { total_hours }))
}

/// GET /stats/top-players/genre/{genre_name}
pub async fn top_players_by_genre(
    State(state): State<AppState>,
    Path(genre_name): Path<String>,
) -> AppResult<Json<Vec<TopPlayer>>> {
    let players = StatsRepo::top_players_by_genre(&state.pool, &genre_name).await?;
    if players.is_empty() {
        return Err(AppError::NotFound(
            "No players found for this genre".to_string(),
        ));
    }
    tracing::debug!(genre = %genre_name, count = players.len(), "Top players resolved");
    Ok(Json(players))
}

/// GET /stats/user-activity?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD
pub async fn user_activity(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<UserActivityQuery>,
) -> AppResult<Json<Vec<UserActivityEntry>>> {
    validate_date_range(params.start_date, params.end_date)?;
    let entries = StatsRepo::user_activity(&state.pool, params.start_date, params.end_date).await?;
    tracing::debug!(
        start = %params.start_date,
        end = %params.end_date,
        count = entries.len(),
        "User activity resolved",
    );
    Ok(Json(entries))
}
