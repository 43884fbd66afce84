//! Review entity model and DTOs.

use gameportal_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A review row from the `reviews` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Review {
    pub review_id: DbId,
    pub user_id: DbId,
    pub game_id: DbId,
    pub rating: i32,
    pub review_text: String,
    pub created_at: Timestamp,
    pub is_approved: bool,
}

/// DTO for creating a review. The author comes from the URL path.
///
/// `rating` is not range-checked.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub game_id: DbId,
    pub rating: i32,
    pub review_text: String,
}
