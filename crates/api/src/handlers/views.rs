//! Dashboard snapshots read straight from the reporting views.

use axum::extract::State;
use axum::Json;
use gameportal_db::models::stats::{GameRatingRow, PopularGameRow, UserStatsRow};
use gameportal_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /views/game-ratings
pub async fn game_ratings(State(state): State<AppState>) -> AppResult<Json<Vec<GameRatingRow>>> {
    Ok(Json(StatsRepo::game_ratings(&state.pool).await?))
}

/// GET /views/user-stats
pub async fn user_stats(State(state): State<AppState>) -> AppResult<Json<Vec<UserStatsRow>>> {
    Ok(Json(StatsRepo::user_stats(&state.pool).await?))
}

/// GET /views/popular-games
pub async fn popular_games(State(state): State<AppState>) -> AppResult<Json<Vec<PopularGameRow>>> {
    Ok(Json(StatsRepo::popular_games(&state.pool).await?))
}
