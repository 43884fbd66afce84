//! Route definitions for the reporting endpoints under `/stats`.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// ```text
/// GET    /stats/game/{game_id}/rating                -> game_rating
/// GET    /stats/user/{user_id}/total-hours           -> user_total_hours
/// GET    /stats/top-players/genre/{genre_name}       -> top_players_by_genre
/// GET    /stats/user-activity?start_date&end_date    -> user_activity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stats/game/{game_id}/rating", get(stats::game_rating))
        .route(
            "/stats/user/{user_id}/total-hours",
            get(stats::user_total_hours),
        )
        .route(
            "/stats/top-players/genre/{genre_name}",
            get(stats::top_players_by_genre),
        )
        .route("/stats/user-activity", get(stats::user_activity))
}
