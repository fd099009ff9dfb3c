//! Comment handlers

use axum::{extract::State, Json};
use blog_service::dto::{
    CommentListResponse, CommentResponse, CreateCommentRequest, UpdateCommentRequest,
};
use blog_service::CommentService;

use super::ensure_account;
use crate::extractors::{AuthUser, BlogIdPath, CommentIdPath, Pagination, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Comment threads on a post
///
/// GET /blogs/blog/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    BlogIdPath(blog_id): BlogIdPath,
    Pagination(page): Pagination,
) -> ApiResult<Json<CommentListResponse>> {
    let service = CommentService::new(state.service_context());
    let response = service.list_comments(blog_id, page).await?;
    Ok(Json(response))
}

/// POST /blogs/blog/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    BlogIdPath(blog_id): BlogIdPath,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<Json<CommentResponse>>> {
    ensure_account(&state, &auth).await?;

    let service = CommentService::new(state.service_context());
    let comment = service.create_comment(blog_id, auth.user_id, request).await?;
    Ok(Created(Json(comment)))
}

/// PATCH /comments/{id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    CommentIdPath(comment_id): CommentIdPath,
    ValidatedJson(request): ValidatedJson<UpdateCommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service
        .update_comment(comment_id, auth.user_id, request)
        .await?;
    Ok(Json(comment))
}

/// DELETE /comments/{id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    CommentIdPath(comment_id): CommentIdPath,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete_comment(comment_id, auth.user_id).await?;
    Ok(NoContent)
}
