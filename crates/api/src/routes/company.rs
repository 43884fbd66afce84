//! Route definitions for the `/companies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::company;
use crate::routes::collection;
use crate::state::AppState;

/// ```text
/// GET    /companies                        -> list
/// POST   /companies                        -> create
/// GET    /companies/{company_id}           -> get_by_id
/// PUT    /companies/{company_id}           -> update
/// DELETE /companies/{company_id}           -> delete
/// GET    /companies/{company_id}/games     -> list_games
/// ```
pub fn router() -> Router<AppState> {
    collection(
        Router::new(),
        "/companies",
        post(company::create).get(company::list),
    )
    .route(
        "/companies/{company_id}",
        get(company::get_by_id)
            .put(company::update)
            .delete(company::delete),
    )
    .route("/companies/{company_id}/games", get(company::list_games))
}
