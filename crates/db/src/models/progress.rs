//! Play-progress entity model and DTOs.

use gameportal_core::patch::double_option;
use gameportal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `user_game_progress` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Progress {
    pub progress_id: DbId,
    pub user_id: DbId,
    pub game_id: DbId,
    pub status: String,
    pub hours_played: i32,
    pub last_played: Option<Timestamp>,
    /// Refreshed by a trigger on every update.
    pub last_updated: Timestamp,
}

/// DTO for creating a progress record. The user comes from the URL path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProgress {
    pub game_id: DbId,
    pub status: String,
    /// Defaults to 0 if omitted.
    pub hours_played: Option<i32>,
    pub last_played: Option<Timestamp>,
}

/// DTO for updating a progress record. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProgress {
    pub status: Option<String>,
    pub hours_played: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub last_played: Option<Option<Timestamp>>,
}
