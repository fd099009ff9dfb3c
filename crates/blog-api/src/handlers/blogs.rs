//! Blog handlers
//!
//! Post CRUD and the listing endpoints. Reads accept an optional bearer token
//! so the viewer's `liked`/`bookmarked` flags can be filled in.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use blog_service::dto::{
    BlogListResponse, BlogMutationResponse, BlogResponse, CreateBlogRequest, DeleteBlogResponse,
    FeaturedBlogsResponse, FeaturedQuery, SearchQuery, TagsQuery, UpdateBlogRequest,
};
use blog_service::BlogService;

use super::ensure_account;
use crate::extractors::{AuthUser, BlogIdPath, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Create a post
///
/// POST /blogs
pub async fn create_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBlogRequest>,
) -> ApiResult<Created<Json<BlogMutationResponse>>> {
    ensure_account(&state, &auth).await?;

    let service = BlogService::new(state.service_context());
    let blog = service.create_blog(auth.user_id, request).await?;
    Ok(Created(Json(BlogMutationResponse {
        message: "Blog created successfully".to_string(),
        blog: blog.into(),
    })))
}

/// All posts, newest first
///
/// GET /blogs
pub async fn list_blogs(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Pagination(page): Pagination,
) -> ApiResult<Json<BlogListResponse>> {
    let service = BlogService::new(state.service_context());
    let blogs = service.list_blogs(page, viewer.user_id()).await?;
    Ok(Json(blogs.into()))
}

/// GET /blogs/search?query=
pub async fn search_blogs(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    WithRejection(Query(search), _): WithRejection<Query<SearchQuery>, ApiError>,
    Pagination(page): Pagination,
) -> ApiResult<Json<BlogListResponse>> {
    let service = BlogService::new(state.service_context());
    let blogs = service
        .search_blogs(&search.query, page, viewer.user_id())
        .await?;

    let mut response = BlogListResponse::from(blogs);
    response.query = Some(search.query.trim().to_string());
    Ok(Json(response))
}

/// GET /blogs/featured?limit=
pub async fn featured_blogs(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    WithRejection(Query(featured), _): WithRejection<Query<FeaturedQuery>, ApiError>,
) -> ApiResult<Json<FeaturedBlogsResponse>> {
    let service = BlogService::new(state.service_context());
    let blogs = service
        .featured_blogs(featured.limit, viewer.user_id())
        .await?;
    Ok(Json(FeaturedBlogsResponse {
        featured_blogs: blogs.into_iter().map(BlogResponse::from).collect(),
    }))
}

/// Posts carrying any of the listed tags
///
/// GET /blogs/tags?tags=a,b
pub async fn blogs_by_tags(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    WithRejection(Query(tags), _): WithRejection<Query<TagsQuery>, ApiError>,
    Pagination(page): Pagination,
) -> ApiResult<Json<BlogListResponse>> {
    let service = BlogService::new(state.service_context());
    let blogs = service
        .blogs_by_tags(&tags.names(), page, viewer.user_id())
        .await?;
    Ok(Json(blogs.into()))
}

/// GET /blogs/category/{category}
pub async fn blogs_by_category(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(category): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<BlogListResponse>> {
    let service = BlogService::new(state.service_context());
    let (category, blogs) = service
        .blogs_by_category(&category, page, viewer.user_id())
        .await?;

    let mut response = BlogListResponse::from(blogs);
    response.category = Some(category.name);
    Ok(Json(response))
}

/// GET /blogs/blog/{id}
pub async fn get_blog(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    BlogIdPath(blog_id): BlogIdPath,
) -> ApiResult<Json<BlogResponse>> {
    let service = BlogService::new(state.service_context());
    let blog = service.get_blog_by_id(blog_id, viewer.user_id()).await?;
    Ok(Json(blog.into()))
}

/// GET /blogs/{slug}
pub async fn get_blog_by_slug(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<BlogResponse>> {
    let service = BlogService::new(state.service_context());
    let blog = service.get_blog_by_slug(&slug, viewer.user_id()).await?;
    Ok(Json(blog.into()))
}

/// Update the supplied fields of a post
///
/// PUT /blogs/blog/{id}
pub async fn update_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    BlogIdPath(blog_id): BlogIdPath,
    ValidatedJson(request): ValidatedJson<UpdateBlogRequest>,
) -> ApiResult<Json<BlogMutationResponse>> {
    let service = BlogService::new(state.service_context());
    let blog = service.update_blog(auth.user_id, blog_id, request).await?;
    Ok(Json(BlogMutationResponse {
        message: "Blog updated successfully".to_string(),
        blog: blog.into(),
    }))
}

/// DELETE /blogs/blog/{id}
pub async fn delete_blog(
    State(state): State<AppState>,
    auth: AuthUser,
    BlogIdPath(blog_id): BlogIdPath,
) -> ApiResult<Json<DeleteBlogResponse>> {
    let service = BlogService::new(state.service_context());
    let deleted_blog_id = service.delete_blog(auth.user_id, blog_id).await?;
    Ok(Json(DeleteBlogResponse {
        message: "Blog deleted successfully".to_string(),
        deleted_blog_id,
    }))
}
