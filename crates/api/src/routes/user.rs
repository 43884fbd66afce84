//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::routes::collection;
use crate::state::AppState;

/// ```text
/// GET    /users                      -> list
/// POST   /users                      -> create
/// GET    /users/{user_id}            -> get_by_id
/// PUT    /users/{user_id}            -> update
/// DELETE /users/{user_id}            -> delete
/// GET    /users/{user_id}/reviews    -> list_reviews
/// GET    /users/{user_id}/progress   -> list_progress
/// ```
pub fn router() -> Router<AppState> {
    collection(Router::new(), "/users", post(user::create).get(user::list))
        .route(
            "/users/{user_id}",
            get(user::get_by_id).put(user::update).delete(user::delete),
        )
        .route("/users/{user_id}/reviews", get(user::list_reviews))
        .route("/users/{user_id}/progress", get(user::list_progress))
}
