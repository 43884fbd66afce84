//! User entity model and DTOs.

use gameportal_core::patch::double_option;
use gameportal_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub registration_date: Date,
    pub is_active: bool,
    pub bio: Option<String>,
    /// Cache of the user's summed progress hours, kept current by a trigger.
    pub total_hours: i64,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserResponse {
    pub user_id: DbId,
    pub username: String,
    pub email: String,
    pub registration_date: Date,
    pub is_active: bool,
    pub bio: Option<String>,
    pub total_hours: i64,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
            registration_date: user.registration_date,
            is_active: user.is_active,
            bio: user.bio,
            total_hours: user.total_hours,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub bio: Option<String>,
}

/// DTO for updating an existing user. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub bio: Option<Option<String>>,
}
