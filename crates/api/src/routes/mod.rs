pub mod batch;
pub mod company;
pub mod game;
pub mod genre;
pub mod health;
pub mod progress;
pub mod review;
pub mod stats;
pub mod user;
pub mod views;

use axum::routing::{get, MethodRouter};
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Build the API route tree. Routes are mounted at the root, not under a
/// version prefix.
///
/// Route hierarchy:
///
/// ```text
/// /                                                liveness message
///
/// /users                                           list, create
/// /users/{user_id}                                 get, update, delete
/// /users/{user_id}/reviews                         reviews written by the user
/// /users/{user_id}/progress                        progress records of the user
///
/// /companies                                       list, create
/// /companies/{company_id}                          get, update, delete
/// /companies/{company_id}/games                    games owned by the company
///
/// /games                                           list, create
/// /games/{game_id}                                 get, update, delete
/// /games/{game_id}/genres                          linked genres
/// /games/{game_id}/genres/{genre_id}               link (PUT), unlink (DELETE)
///
/// /genres                                          list, create
///
/// /batch/games                                     bulk insert (POST)
///
/// /reviews/user/{user_id}                          create review (POST)
/// /reviews/game/{game_id}                          approved reviews of a game
/// /reviews/{review_id}                             get, delete
///
/// /progress/user/{user_id}                         create progress (POST)
/// /progress/{progress_id}                          get, update, delete
///
/// /stats/game/{game_id}/rating                     average approved rating
/// /stats/user/{user_id}/total-hours                summed hours played
/// /stats/top-players/genre/{genre_name}            top 10 players of a genre
/// /stats/user-activity                             per-day activity in a range
///
/// /views/game-ratings                              dashboard snapshot
/// /views/user-stats                                dashboard snapshot
/// /views/popular-games                             dashboard snapshot
/// ```
///
/// Collection roots answer on both `/users` and `/users/`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .merge(user::router())
        .merge(company::router())
        .merge(game::router())
        .merge(genre::router())
        .merge(batch::router())
        .merge(review::router())
        .merge(progress::router())
        .merge(stats::router())
        .merge(views::router())
}

/// Register `methods` on both `path` and `path/`.
pub(crate) fn collection(
    router: Router<AppState>,
    path: &str,
    methods: MethodRouter<AppState>,
) -> Router<AppState> {
    router
        .route(path, methods.clone())
        .route(&format!("{path}/"), methods)
}

#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// GET / -- liveness message.
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Game Portal API is running!",
    })
}
