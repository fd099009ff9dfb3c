//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Field names are
//! camelCase on the wire.

use blog_core::value_objects::{BlogId, CategoryId, CommentId, PaginationMeta, TagId, UserId};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Acknowledgement with no payload
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Author fields shown next to posts and comments
#[derive(Debug, Clone, Serialize)]
pub struct AuthorResponse {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

/// Full user account, returned to the user themself
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub country: Option<String>,
    pub twitter_acc: Option<String>,
    pub github_acc: Option<String>,
    pub linkedin_acc: Option<String>,
    pub another_acc: Option<String>,
    pub profile_views: i64,
    pub created_at: DateTime<Utc>,
}

/// Public user fields (no email)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUserResponse {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub country: Option<String>,
    pub twitter_acc: Option<String>,
    pub github_acc: Option<String>,
    pub linkedin_acc: Option<String>,
    pub another_acc: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A post as listed on its author's profile
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBlogResponse {
    pub id: BlogId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub reading_time: i32,
    pub featured: bool,
    pub view_count: i64,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

/// Profile page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: PublicUserResponse,
    pub follower_count: i64,
    pub following_count: i64,
    pub blog_count: i64,
    pub total_views: i64,
    pub blogs: Vec<ProfileBlogResponse>,
}

/// Whether the current user follows another
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FollowStatusResponse {
    pub is_following: bool,
}

// ============================================================================
// Blog Responses
// ============================================================================

/// A formatted post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponse {
    pub id: BlogId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub date: DateTime<Utc>,
    pub reading_time: i32,
    pub featured: bool,
    pub author_id: UserId,
    pub author: AuthorResponse,
    /// Names in link order
    pub categories: Vec<String>,
    /// Names in link order
    pub tags: Vec<String>,
    pub view_count: i64,
    pub like_count: i64,
    pub bookmark_count: i64,
    pub comment_count: i64,
    pub liked: bool,
    pub bookmarked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Paginated posts; search and category listings echo their input
#[derive(Debug, Clone, Serialize)]
pub struct BlogListResponse {
    pub blogs: Vec<BlogResponse>,
    pub pagination: PaginationMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Featured posts, unpaginated
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedBlogsResponse {
    pub featured_blogs: Vec<BlogResponse>,
}

/// The current user's bookmarked posts
#[derive(Debug, Clone, Serialize)]
pub struct BookmarksResponse {
    pub bookmarks: Vec<BlogResponse>,
    pub pagination: PaginationMeta,
}

/// Result of creating or updating a post
#[derive(Debug, Clone, Serialize)]
pub struct BlogMutationResponse {
    pub message: String,
    pub blog: BlogResponse,
}

/// Result of deleting a post
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteBlogResponse {
    pub message: String,
    pub deleted_blog_id: BlogId,
}

// ============================================================================
// Interaction Responses
// ============================================================================

/// Result of toggling a like
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub message: String,
    pub liked: bool,
    pub like_count: i64,
}

/// Result of toggling a bookmark
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub message: String,
    pub bookmarked: bool,
    pub bookmark_count: i64,
}

/// Result of recording a view
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResponse {
    pub message: String,
    pub recorded: bool,
    pub view_count: i64,
}

/// The current user's interaction state on a post, with its counts
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionStatusResponse {
    pub liked: bool,
    pub bookmarked: bool,
    pub viewed: bool,
    pub like_count: i64,
    pub bookmark_count: i64,
    pub comment_count: i64,
    pub view_count: i64,
}

// ============================================================================
// Comment Responses
// ============================================================================

/// A comment with its author; top-level comments carry their replies
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: CommentId,
    pub content: String,
    pub blog_id: BlogId,
    pub parent_id: Option<CommentId>,
    pub author: AuthorResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replies: Option<Vec<CommentResponse>>,
}

/// Paginated comment threads
#[derive(Debug, Clone, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
    pub pagination: PaginationMeta,
}

// ============================================================================
// Taxonomy Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: TagId,
    pub name: String,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
