//! User handlers
//!
//! Current user, public profiles, a user's posts and bookmarks, and follows.

use axum::{extract::State, Json};
use blog_service::dto::{
    BlogListResponse, BookmarksResponse, FollowStatusResponse, MessageResponse, ProfileResponse,
    UserResponse,
};
use blog_service::{BlogService, UserService};

use crate::extractors::{AuthUser, OptionalAuthUser, Pagination, UserIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get current user, provisioning the account on first sight
///
/// GET /me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service
        .current_user(auth.user_id, auth.email.as_deref(), auth.name.as_deref())
        .await?;
    Ok(Json(response))
}

/// Posts the current user bookmarked
///
/// GET /me/bookmarks
pub async fn get_bookmarks(
    State(state): State<AppState>,
    auth: AuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<BookmarksResponse>> {
    let service = BlogService::new(state.service_context());
    let bookmarks = service.user_bookmarks(auth.user_id, page).await?;
    Ok(Json(bookmarks.into()))
}

/// Public profile
///
/// GET /users/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<ProfileResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(user_id).await?;
    Ok(Json(response))
}

/// Posts written by a user
///
/// GET /users/{user_id}/blogs
pub async fn get_user_blogs(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    UserIdPath(user_id): UserIdPath,
    Pagination(page): Pagination,
) -> ApiResult<Json<BlogListResponse>> {
    let service = BlogService::new(state.service_context());
    let blogs = service.user_blogs(user_id, page, viewer.user_id()).await?;
    Ok(Json(blogs.into()))
}

/// POST /users/{user_id}/follow
pub async fn follow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.follow(auth.user_id, user_id).await?;
    Ok(Json(response))
}

/// DELETE /users/{user_id}/unfollow
pub async fn unfollow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.unfollow(auth.user_id, user_id).await?;
    Ok(Json(response))
}

/// GET /users/{user_id}/follow-status
pub async fn follow_status(
    State(state): State<AppState>,
    auth: AuthUser,
    UserIdPath(user_id): UserIdPath,
) -> ApiResult<Json<FollowStatusResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.follow_status(auth.user_id, user_id).await?;
    Ok(Json(response))
}
