//! Category and tag listings

use axum::{extract::State, Json};
use blog_service::dto::{CategoryResponse, TagResponse};
use blog_service::TaxonomyService;

use crate::response::ApiResult;
use crate::state::AppState;

/// GET /categories
pub async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryResponse>>> {
    let service = TaxonomyService::new(state.service_context());
    Ok(Json(service.list_categories().await?))
}

/// GET /tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<Vec<TagResponse>>> {
    let service = TaxonomyService::new(state.service_context());
    Ok(Json(service.list_tags().await?))
}
