//! Shared query parameter types for API handlers.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::AppError;

/// Query-string extractor whose rejection is an [`AppError::BadRequest`],
/// so malformed parameters answer with the usual `{error, code}` body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}

/// Optional pagination parameters (`?limit=&offset=`).
///
/// Both absent means the full, unbounded listing. Negative values are
/// treated as 0.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    pub fn limit(&self) -> Option<i64> {
        self.limit.map(|l| l.max(0))
    }

    pub fn offset(&self) -> Option<i64> {
        self.offset.map(|o| o.max(0))
    }
}
