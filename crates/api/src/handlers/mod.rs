//! Request handlers for the game portal.
//!
//! Each submodule provides async handler functions for a single entity type
//! or reporting domain. Handlers delegate to the corresponding repository in
//! `gameportal_db` and map errors via [`AppError`].

pub mod batch;
pub mod company;
pub mod game;
pub mod genre;
pub mod progress;
pub mod review;
pub mod stats;
pub mod user;
pub mod views;

use gameportal_core::error::CoreError;
use gameportal_core::types::DbId;
use gameportal_db::models::company::Company;
use gameportal_db::models::game::Game;
use gameportal_db::models::genre::Genre;
use gameportal_db::models::user::User;
use gameportal_db::repositories::{CompanyRepo, GameRepo, GenreRepo, UserRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Load a user or fail with 404.
pub(crate) async fn ensure_user_exists(pool: &PgPool, id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
}

/// Load a game or fail with 404.
pub(crate) async fn ensure_game_exists(pool: &PgPool, id: DbId) -> AppResult<Game> {
    GameRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Game", id }))
}

/// Load a company or fail with 404.
pub(crate) async fn ensure_company_exists(pool: &PgPool, id: DbId) -> AppResult<Company> {
    CompanyRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Company",
            id,
        }))
}

/// Load a genre or fail with 404.
pub(crate) async fn ensure_genre_exists(pool: &PgPool, id: DbId) -> AppResult<Genre> {
    GenreRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Genre", id }))
}
