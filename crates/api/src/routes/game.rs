//! Route definitions for the `/games` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::game;
use crate::routes::collection;
use crate::state::AppState;

/// ```text
/// GET    /games                                -> list
/// POST   /games                                -> create
/// GET    /games/{game_id}                      -> get_by_id
/// PUT    /games/{game_id}                      -> update
/// DELETE /games/{game_id}                      -> delete
/// GET    /games/{game_id}/genres               -> list_genres
/// PUT    /games/{game_id}/genres/{genre_id}    -> attach_genre
/// DELETE /games/{game_id}/genres/{genre_id}    -> detach_genre
/// ```
pub fn router() -> Router<AppState> {
    collection(Router::new(), "/games", post(game::create).get(game::list))
        .route(
            "/games/{game_id}",
            get(game::get_by_id).put(game::update).delete(game::delete),
        )
        .route("/games/{game_id}/genres", get(game::list_genres))
        .route(
            "/games/{game_id}/genres/{genre_id}",
            put(game::attach_genre).delete(game::detach_genre),
        )
}
