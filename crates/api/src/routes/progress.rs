use axum::routing::{get, post};
use axum::Router;

use crate::handlers::progress;
use crate::state::AppState;

/// ```text
/// POST   /progress/user/{user_id}     -> create_for_user
/// GET    /progress/{progress_id}      -> get_by_id
/// PUT    /progress/{progress_id}      -> update
/// DELETE /progress/{progress_id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/progress/user/{user_id}", post(progress::create_for_user))
        .route(
            "/progress/{progress_id}",
            get(progress::get_by_id)
                .put(progress::update)
                .delete(progress::delete),
        )
}
