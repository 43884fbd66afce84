//! Handlers for the `/games` resource and its genre links.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gameportal_core::error::CoreError;
use gameportal_core::types::DbId;
use gameportal_db::models::game::{CreateGame, Game, UpdateGame};
use gameportal_db::models::genre::Genre;
use gameportal_db::repositories::{GameRepo, GenreRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_company_exists, ensure_game_exists, ensure_genre_exists};
use crate::query::{ApiQuery, PaginationParams};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

/// POST /games
///
/// The title must be unused and the owning company must exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGame>,
) -> AppResult<(StatusCode, Json<Game>)> {
    if GameRepo::find_by_title(&state.pool, &input.title)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Game title already exists".to_string(),
        )));
    }
    ensure_company_exists(&state.pool, input.company_id).await?;

    let game = GameRepo::create(&state.pool, &input).await?;
    tracing::info!(
        game_id = game.game_id,
        title = %game.title,
        company_id = game.company_id,
        "Game created",
    );
    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /games
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PaginationParams>,
) -> AppResult<Json<Vec<Game>>> {
    let games = GameRepo::list(&state.pool, page.limit(), page.offset()).await?;
    tracing::debug!(count = games.len(), "Listed games");
    Ok(Json(games))
}

/// GET /games/{game_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<Json<Game>> {
    ensure_game_exists(&state.pool, game_id).await.map(Json)
}

/// PUT /games/{game_id}
pub async fn update(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
    Json(input): Json<UpdateGame>,
) -> AppResult<Json<Game>> {
    if let Some(company_id) = input.company_id {
        ensure_company_exists(&state.pool, company_id).await?;
    }

    let game = GameRepo::update(&state.pool, game_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Game",
            id: game_id,
        }))?;
    tracing::info!(game_id, "Game updated");
    Ok(Json(game))
}

/// DELETE /games/{game_id}
///
/// Reviews, progress records and genre links of the game go with it.
pub async fn delete(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = GameRepo::delete(&state.pool, game_id).await?;
    if deleted {
        tracing::info!(game_id, "Game deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Game",
            id: game_id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Genre links
// ---------------------------------------------------------------------------

/// GET /games/{game_id}/genres
pub async fn list_genres(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<Json<Vec<Genre>>> {
    ensure_game_exists(&state.pool, game_id).await?;
    let genres = GenreRepo::list_for_game(&state.pool, game_id).await?;
    Ok(Json(genres))
}

/// PUT /games/{game_id}/genres/{genre_id}
///
/// Idempotent: linking an already linked genre is a no-op.
pub async fn attach_genre(
    State(state): State<AppState>,
    Path((game_id, genre_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_game_exists(&state.pool, game_id).await?;
    ensure_genre_exists(&state.pool, genre_id).await?;

    GenreRepo::attach_to_game(&state.pool, game_id, genre_id).await?;
    tracing::info!(game_id, genre_id, "Genre attached to game");
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /games/{game_id}/genres/{genre_id}
pub async fn detach_genre(
    State(state): State<AppState>,
    Path((game_id, genre_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    ensure_game_exists(&state.pool, game_id).await?;
    ensure_genre_exists(&state.pool, genre_id).await?;

    if GenreRepo::detach_from_game(&state.pool, game_id, genre_id).await? {
        tracing::info!(game_id, genre_id, "Genre detached from game");
    }
    Ok(StatusCode::NO_CONTENT)
}
