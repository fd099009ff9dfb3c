//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use blog_core::value_objects::UserId;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A name that is unique across test runs against the same database
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}{}", &UserId::new().into_inner().simple().to_string()[..12])
}

/// An identity with a bearer token
#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: UserId,
    pub email: String,
    pub token: String,
}

/// Create blog request; categories and tags go out as comma strings
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    pub description: String,
    pub content: String,
    pub image: String,
    pub reading_time: i32,
    pub featured: bool,
    pub categories: String,
    pub tags: String,
}

impl CreateBlogRequest {
    /// A valid post with a title unique to this run
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Integration post {suffix} {}", UserId::new()),
            description: "A post written by the integration suite".to_string(),
            content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(3),
            image: "https://cdn.example.com/cover.png".to_string(),
            reading_time: 3,
            featured: false,
            categories: String::new(),
            tags: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_categories(mut self, categories: impl Into<String>) -> Self {
        self.categories = categories.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

/// Author summary on a post
#[derive(Debug, Deserialize)]
pub struct AuthorBody {
    pub id: String,
    pub username: String,
    pub name: String,
}

/// Formatted post
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogBody {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub author_id: String,
    pub author: AuthorBody,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub view_count: i64,
    pub like_count: i64,
    pub bookmark_count: i64,
    pub comment_count: i64,
    pub liked: bool,
    pub bookmarked: bool,
}

/// Create/update response
#[derive(Debug, Deserialize)]
pub struct BlogMutationBody {
    pub message: String,
    pub blog: BlogBody,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationBody {
    pub total_count: i64,
    pub total_pages: i64,
    pub current_page: u32,
    pub limit: u32,
}

/// Paginated post list
#[derive(Debug, Deserialize)]
pub struct BlogListBody {
    pub blogs: Vec<BlogBody>,
    pub pagination: PaginationBody,
    pub query: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeBody {
    pub message: String,
    pub liked: bool,
    pub like_count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkBody {
    pub bookmarked: bool,
    pub bookmark_count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewBody {
    pub recorded: bool,
    pub view_count: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    pub id: String,
    pub content: String,
    pub parent_id: Option<String>,
    pub author: AuthorBody,
    pub replies: Option<Vec<CommentBody>>,
}

#[derive(Debug, Deserialize)]
pub struct CommentListBody {
    pub comments: Vec<CommentBody>,
    pub pagination: PaginationBody,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
