//! Route definitions
//!
//! REST routes are mounted under /api/v1; GraphQL lives at /graphql.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::graphql::{graphql_handler, graphql_playground};
use crate::handlers::{blogs, comments, health, interactions, taxonomy, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .route("/graphql", get(graphql_playground).post(graphql_handler))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(me_routes())
        .merge(blog_routes())
        .merge(comment_routes())
        .merge(user_routes())
        .merge(taxonomy_routes())
}

/// Current user routes
fn me_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(users::get_current_user))
        .route("/me/bookmarks", get(users::get_bookmarks))
}

/// Blog routes
fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/blogs", get(blogs::list_blogs).post(blogs::create_blog))
        .route("/blogs/search", get(blogs::search_blogs))
        .route("/blogs/featured", get(blogs::featured_blogs))
        .route("/blogs/tags", get(blogs::blogs_by_tags))
        .route("/blogs/category/:category", get(blogs::blogs_by_category))
        .route(
            "/blogs/blog/:id",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        // Interactions
        .route("/blogs/blog/:id/view", post(interactions::record_view))
        .route("/blogs/blog/:id/like", post(interactions::toggle_like))
        .route("/blogs/blog/:id/bookmark", post(interactions::toggle_bookmark))
        .route("/blogs/blog/:id/interaction", get(interactions::interaction_status))
        // Comments
        .route(
            "/blogs/blog/:id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/blogs/:slug", get(blogs::get_blog_by_slug))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new().route(
        "/comments/:id",
        patch(comments::update_comment).delete(comments::delete_comment),
    )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id", get(users::get_profile))
        .route("/users/:user_id/blogs", get(users::get_user_blogs))
        .route("/users/:user_id/follow", post(users::follow_user))
        .route("/users/:user_id/unfollow", delete(users::unfollow_user))
        .route("/users/:user_id/follow-status", get(users::follow_status))
}

/// Category and tag listings
fn taxonomy_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(taxonomy::list_categories))
        .route("/tags", get(taxonomy::list_tags))
}
