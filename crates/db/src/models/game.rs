//! Game entity model and DTOs.

use gameportal_core::patch::double_option;
use gameportal_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A game row from the `games` table.
///
/// `average_rating` and `review_count` are caches over the approved reviews,
/// maintained by a database trigger. They are never written by the API.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Game {
    pub game_id: DbId,
    pub title: String,
    pub description: String,
    pub release_date: Option<Date>,
    pub company_id: DbId,
    pub created_at: Timestamp,
    pub average_rating: f64,
    pub review_count: i32,
}

/// DTO for creating a new game. Also the element type of batch inserts.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGame {
    pub title: String,
    pub description: String,
    pub release_date: Option<Date>,
    pub company_id: DbId,
}

/// DTO for updating an existing game. All fields are optional;
/// `release_date: null` clears the date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGame {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub release_date: Option<Option<Date>>,
    pub company_id: Option<DbId>,
}
