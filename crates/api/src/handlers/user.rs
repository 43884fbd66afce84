//! Handlers for the `/users` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gameportal_core::error::CoreError;
use gameportal_core::types::DbId;
use gameportal_db::models::progress::Progress;
use gameportal_db::models::review::Review;
use gameportal_db::models::user::{CreateUser, UpdateUser, UserResponse};
use gameportal_db::repositories::{ProgressRepo, ReviewRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::query::{ApiQuery, PaginationParams};
use crate::state::AppState;

/// POST /users
///
/// Rejects a taken username or email before inserting.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    if UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username already exists".to_string(),
        )));
    }
    if UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already exists".to_string(),
        )));
    }

    let user = UserRepo::create(&state.pool, &input).await?;
    tracing::info!(user_id = user.user_id, username = %user.username, "User created");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PaginationParams>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool, page.limit(), page.offset()).await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// GET /users/{user_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<UserResponse>> {
    let user = ensure_user_exists(&state.pool, user_id).await?;
    Ok(Json(user.into()))
}

/// PUT /users/{user_id}
pub async fn update(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<UserResponse>> {
    let user = UserRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))?;
    tracing::info!(user_id, "User updated");
    Ok(Json(user.into()))
}

/// DELETE /users/{user_id}
///
/// The user's reviews and progress records are removed with them.
pub async fn delete(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, user_id).await?;
    if deleted {
        tracing::info!(user_id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))
    }
}

/// GET /users/{user_id}/reviews
///
/// Every review the user wrote, including unapproved ones.
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Review>>> {
    ensure_user_exists(&state.pool, user_id).await?;
    let reviews = ReviewRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(reviews))
}

/// GET /users/{user_id}/progress
pub async fn list_progress(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Progress>>> {
    ensure_user_exists(&state.pool, user_id).await?;
    let records = ProgressRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(records))
}
