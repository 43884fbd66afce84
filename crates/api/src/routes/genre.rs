use axum::routing::post;
use axum::Router;

use crate::handlers::genre;
use crate::routes::collection;
use crate::state::AppState;

/// ```text
/// GET    /genres    -> list
/// POST   /genres    -> create
/// ```
pub fn router() -> Router<AppState> {
    collection(Router::new(), "/genres", post(genre::create).get(genre::list))
}
