/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Every request borrows a connection from `pool` for the duration of its
/// queries; there is no other long-lived state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gameportal_db::DbPool,
}
