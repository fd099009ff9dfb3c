//! Pagination extractor
//!
//! Extracts `?page=&limit=` from the query string.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::value_objects::PageRequest;
use blog_service::dto::PaginationQuery;

use crate::response::ApiError;

/// Page request with defaults and the limit cap already applied
#[derive(Debug, Clone, Copy, Default)]
pub struct Pagination(pub PageRequest);

impl From<PaginationQuery> for Pagination {
    fn from(params: PaginationQuery) -> Self {
        Self(params.to_request())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Ok(Pagination::from(params))
    }
}
