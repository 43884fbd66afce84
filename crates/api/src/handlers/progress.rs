//! Handlers for the `/progress` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gameportal_core::error::CoreError;
use gameportal_core::progress::{is_known_status, MAX_STATUS_LEN};
use gameportal_core::types::DbId;
use gameportal_db::models::progress::{CreateProgress, Progress, UpdateProgress};
use gameportal_db::repositories::ProgressRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_game_exists, ensure_user_exists};
use crate::state::AppState;

/// Reject statuses that do not fit the column.
fn check_status(status: &str) -> Result<(), CoreError> {
    if status.chars().count() > MAX_STATUS_LEN {
        return Err(CoreError::Validation(format!(
            "status must be at most {MAX_STATUS_LEN} characters"
        )));
    }
    if !is_known_status(status) {
        tracing::debug!(status, "Progress stored with a custom status");
    }
    Ok(())
}

/// POST /progress/user/{user_id}
pub async fn create_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<CreateProgress>,
) -> AppResult<(StatusCode, Json<Progress>)> {
    check_status(&input.status)?;
    ensure_user_exists(&state.pool, user_id).await?;
    ensure_game_exists(&state.pool, input.game_id).await?;

    let progress = ProgressRepo::create(&state.pool, user_id, &input).await?;
    tracing::info!(
        progress_id = progress.progress_id,
        user_id,
        game_id = progress.game_id,
        status = %progress.status,
        "Progress created",
    );
    Ok((StatusCode::CREATED, Json(progress)))
}

/// GET /progress/{progress_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(progress_id): Path<DbId>,
) -> AppResult<Json<Progress>> {
    let progress = ProgressRepo::find_by_id(&state.pool, progress_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Progress",
            id: progress_id,
        }))?;
    Ok(Json(progress))
}

/// PUT /progress/{progress_id}
pub async fn update(
    State(state): State<AppState>,
    Path(progress_id): Path<DbId>,
    Json(input): Json<UpdateProgress>,
) -> AppResult<Json<Progress>> {
    if let Some(status) = &input.status {
        check_status(status)?;
    }

    let progress = ProgressRepo::update(&state.pool, progress_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Progress",
            id: progress_id,
        }))?;
    tracing::info!(progress_id, "Progress updated");
    Ok(Json(progress))
}

/// DELETE /progress/{progress_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(progress_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProgressRepo::delete(&state.pool, progress_id).await?;
    if deleted {
        tracing::info!(progress_id, "Progress deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Progress",
            id: progress_id,
        }))
    }
}
