//! Route definitions for the `/reviews` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::review;
use crate::state::AppState;

/// ```text
/// POST   /reviews/user/{user_id}    -> create_for_user
/// GET    /reviews/game/{game_id}    -> list_for_game
/// GET    /reviews/{review_id}       -> get_by_id
/// DELETE /reviews/{review_id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/reviews/user/{user_id}", post(review::create_for_user))
        .route("/reviews/game/{game_id}", get(review::list_for_game))
        .route(
            "/reviews/{review_id}",
            get(review::get_by_id).delete(review::delete),
        )
}
