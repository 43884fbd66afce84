//! Handlers for the `/reviews` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gameportal_core::error::CoreError;
use gameportal_core::types::DbId;
use gameportal_db::models::review::{CreateReview, Review};
use gameportal_db::repositories::ReviewRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_game_exists, ensure_user_exists};
use crate::state::AppState;

/// POST /reviews/user/{user_id}
///
/// New reviews are approved immediately. A second review by the same user
/// for the same game is rejected by the store's uniqueness constraint.
pub async fn create_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    ensure_user_exists(&state.pool, user_id).await?;
    ensure_game_exists(&state.pool, input.game_id).await?;

    let review = ReviewRepo::create(&state.pool, user_id, &input).await?;
    tracing::info!(
        review_id = review.review_id,
        user_id,
        game_id = review.game_id,
        rating = review.rating,
        "Review created",
    );
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /reviews/game/{game_id}
///
/// Only approved reviews are listed. An unknown game yields an empty list.
pub async fn list_for_game(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    let reviews = ReviewRepo::list_approved_for_game(&state.pool, game_id).await?;
    tracing::debug!(game_id, count = reviews.len(), "Listed approved reviews");
    Ok(Json(reviews))
}

/// GET /reviews/{review_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<Json<Review>> {
    let review = ReviewRepo::find_by_id(&state.pool, review_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))?;
    Ok(Json(review))
}

/// DELETE /reviews/{review_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(review_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ReviewRepo::delete(&state.pool, review_id).await?;
    if deleted {
        tracing::info!(review_id, "Review deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Review",
            id: review_id,
        }))
    }
}
