use axum::routing::post;
use axum::Router;

use crate::handlers::batch;
use crate::state::AppState;

/// ```text
/// POST   /batch/games    -> insert_games
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/batch/games", post(batch::insert_games))
}
