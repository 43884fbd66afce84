use axum::routing::get;
use axum::Router;

use crate::handlers::views;
use crate::state::AppState;

/// ```text
/// GET    /views/game-ratings     -> game_ratings
/// GET    /views/user-stats       -> user_stats
/// GET    /views/popular-games    -> popular_games
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/views/game-ratings", get(views::game_ratings))
        .route("/views/user-stats", get(views::user_stats))
        .route("/views/popular-games", get(views::popular_games))
}
