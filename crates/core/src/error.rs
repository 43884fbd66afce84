use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The operation is blocked by dependent rows (e.g. a company that
    /// still owns games).
    #[error("Restricted: {0}")]
    Restricted(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
