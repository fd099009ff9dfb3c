//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Category and tag fields are [`NameList`]s, which accept an array, a
//! JSON-array string or a comma list and never fail to deserialize.

use blog_core::value_objects::{CommentId, NameList, PageRequest};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Blog Requests
// ============================================================================

fn default_reading_time() -> i32 {
    1
}

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    #[validate(length(min = 5, max = 200, message = "Title must be 5-200 characters"))]
    pub title: String,

    #[validate(length(min = 10, max = 500, message = "Description must be 10-500 characters"))]
    pub description: String,

    #[validate(length(min = 50, message = "Content must be at least 50 characters"))]
    pub content: String,

    /// Image URL from the upload service
    #[validate(length(min = 1, message = "Image is required"))]
    pub image: String,

    #[serde(default = "default_reading_time")]
    #[validate(range(min = 1, message = "Reading time must be at least 1 minute"))]
    pub reading_time: i32,

    #[serde(default)]
    pub featured: bool,

    #[serde(default)]
    pub categories: NameList,

    #[serde(default)]
    pub tags: NameList,
}

/// Update post request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    #[validate(length(min = 5, max = 200, message = "Title must be 5-200 characters"))]
    pub title: Option<String>,

    #[validate(length(min = 10, max = 500, message = "Description must be 10-500 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 50, message = "Content must be at least 50 characters"))]
    pub content: Option<String>,

    #[validate(length(min = 1, message = "Image must not be empty"))]
    pub image: Option<String>,

    #[validate(range(min = 1, message = "Reading time must be at least 1 minute"))]
    pub reading_time: Option<i32>,

    pub featured: Option<bool>,

    /// Replaces every category link when present
    pub categories: Option<NameList>,

    /// Replaces every tag link when present
    pub tags: Option<NameList>,
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,

    /// Top-level comment this one replies to
    pub parent_id: Option<CommentId>,
}

/// Edit comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}

// ============================================================================
// Query Parameters
// ============================================================================

/// `?page=&limit=` on every list endpoint
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl PaginationQuery {
    pub fn to_request(self) -> PageRequest {
        PageRequest::new(self.page, self.limit)
    }
}

/// `?query=` for search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

/// `?tags=a,b` for the tag listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagsQuery {
    #[serde(default)]
    pub tags: String,
}

impl TagsQuery {
    /// Split the comma list, dropping blank entries
    pub fn names(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

/// `?limit=` for featured posts
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct FeaturedQuery {
    pub limit: Option<u32>,
}
