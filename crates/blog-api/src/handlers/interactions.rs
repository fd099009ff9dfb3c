//! Interaction handlers
//!
//! Like and bookmark toggles, view recording and the per-user status of a post.

use axum::{extract::State, Json};
use blog_service::dto::{BookmarkResponse, InteractionStatusResponse, LikeResponse, ViewResponse};
use blog_service::InteractionService;

use super::ensure_account;
use crate::extractors::{AuthUser, BlogIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// POST /blogs/blog/{id}/view
pub async fn record_view(
    State(state): State<AppState>,
    auth: AuthUser,
    BlogIdPath(blog_id): BlogIdPath,
) -> ApiResult<Json<ViewResponse>> {
    ensure_account(&state, &auth).await?;

    let service = InteractionService::new(state.service_context());
    let response = service.view_response(blog_id, auth.user_id).await?;
    Ok(Json(response))
}

/// POST /blogs/blog/{id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    BlogIdPath(blog_id): BlogIdPath,
) -> ApiResult<Json<LikeResponse>> {
    ensure_account(&state, &auth).await?;

    let service = InteractionService::new(state.service_context());
    let response = service.toggle_like(blog_id, auth.user_id).await?;
    Ok(Json(response))
}

/// POST /blogs/blog/{id}/bookmark
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    BlogIdPath(blog_id): BlogIdPath,
) -> ApiResult<Json<BookmarkResponse>> {
    ensure_account(&state, &auth).await?;

    let service = InteractionService::new(state.service_context());
    let response = service.toggle_bookmark(blog_id, auth.user_id).await?;
    Ok(Json(response))
}

/// GET /blogs/blog/{id}/interaction
pub async fn interaction_status(
    State(state): State<AppState>,
    auth: AuthUser,
    BlogIdPath(blog_id): BlogIdPath,
) -> ApiResult<Json<InteractionStatusResponse>> {
    let service = InteractionService::new(state.service_context());
    let response = service.interaction_status(blog_id, auth.user_id).await?;
    Ok(Json(response))
}
