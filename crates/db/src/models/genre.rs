//! Genre entity model and DTOs.

use gameportal_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A genre row from the `genres` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Genre {
    pub genre_id: DbId,
    pub name: String,
    pub description: Option<String>,
}

/// DTO for creating a new genre.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGenre {
    pub name: String,
    pub description: Option<String>,
}
