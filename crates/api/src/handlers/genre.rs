//! Handlers for the `/genres` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gameportal_core::error::CoreError;
use gameportal_db::models::genre::{CreateGenre, Genre};
use gameportal_db::repositories::GenreRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /genres
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGenre>,
) -> AppResult<(StatusCode, Json<Genre>)> {
    if GenreRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Genre name already exists".to_string(),
        )));
    }

    let genre = GenreRepo::create(&state.pool, &input).await?;
    tracing::info!(genre_id = genre.genre_id, name = %genre.name, "Genre created");
    Ok((StatusCode::CREATED, Json(genre)))
}

/// GET /genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Genre>>> {
    let genres = GenreRepo::list(&state.pool).await?;
    tracing::debug!(count = genres.len(), "Listed genres");
    Ok(Json(genres))
}
