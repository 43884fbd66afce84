//! Bulk loading endpoints.

use axum::extract::State;
use axum::Json;
use gameportal_core::error::CoreError;
use gameportal_db::models::game::CreateGame;
use gameportal_db::repositories::{CompanyRepo, GameRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for `POST /batch/games`.
#[derive(Debug, Serialize)]
pub struct BatchInsertResponse {
    /// Rows actually written. Titles that already existed are not counted.
    pub inserted_games: u64,
}

/// POST /batch/games
///
/// Best-effort bulk insert. Every referenced company must exist; games whose
/// title is already taken are skipped silently.
pub async fn insert_games(
    State(state): State<AppState>,
    Json(games): Json<Vec<CreateGame>>,
) -> AppResult<Json<BatchInsertResponse>> {
    let mut company_ids: Vec<_> = games.iter().map(|g| g.company_id).collect();
    company_ids.sort_unstable();
    company_ids.dedup();

    let missing = CompanyRepo::missing_ids(&state.pool, &company_ids).await?;
    if let Some(&id) = missing.first() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }));
    }

    let inserted = GameRepo::create_many(&state.pool, &games).await?;
    tracing::info!(
        submitted = games.len(),
        inserted,
        skipped = games.len() as u64 - inserted,
        "Batch game insert finished",
    );
    Ok(Json(BatchInsertResponse {
        inserted_games: inserted,
    }))
}
