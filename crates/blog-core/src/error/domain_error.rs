//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{BlogId, CommentId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Blog not found: {0}")]
    BlogNotFound(BlogId),

    #[error("Blog not found for slug: {0}")]
    BlogSlugNotFound(String),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("No tags found matching: {0}")]
    TagsNotFound(String),

    #[error("Not following this user")]
    FollowNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Search query is required")]
    EmptySearchQuery,

    #[error("Cannot follow yourself")]
    CannotFollowSelf,

    #[error("Invalid parent comment: {0}")]
    InvalidParentComment(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the author of this blog")]
    NotBlogAuthor,

    #[error("Not the author of this comment")]
    NotCommentAuthor,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Slug already in use: {0}")]
    SlugAlreadyExists(String),

    #[error("Name already in use: {0}")]
    NameAlreadyExists(String),

    #[error("{0} already recorded for this blog")]
    InteractionAlreadyExists(&'static str),

    #[error("Already following this user")]
    AlreadyFollowing,

    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Username already in use: {0}")]
    UsernameAlreadyExists(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BlogNotFound(_) | Self::BlogSlugNotFound(_) => "UNKNOWN_BLOG",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::CategoryNotFound(_) => "UNKNOWN_CATEGORY",
            Self::TagsNotFound(_) => "UNKNOWN_TAGS",
            Self::FollowNotFound => "UNKNOWN_FOLLOW",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmptySearchQuery => "EMPTY_SEARCH_QUERY",
            Self::CannotFollowSelf => "CANNOT_FOLLOW_SELF",
            Self::InvalidParentComment(_) => "INVALID_PARENT_COMMENT",

            // Authorization
            Self::NotBlogAuthor => "NOT_BLOG_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",

            // Conflict
            Self::SlugAlreadyExists(_) => "SLUG_ALREADY_EXISTS",
            Self::NameAlreadyExists(_) => "NAME_ALREADY_EXISTS",
            Self::InteractionAlreadyExists(_) => "INTERACTION_ALREADY_EXISTS",
            Self::AlreadyFollowing => "ALREADY_FOLLOWING",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameAlreadyExists(_) => "USERNAME_ALREADY_EXISTS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::BlogNotFound(_)
                | Self::BlogSlugNotFound(_)
                | Self::CommentNotFound(_)
                | Self::CategoryNotFound(_)
                | Self::TagsNotFound(_)
                | Self::FollowNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::EmptySearchQuery
                | Self::CannotFollowSelf
                | Self::InvalidParentComment(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotBlogAuthor | Self::NotCommentAuthor)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::SlugAlreadyExists(_)
                | Self::NameAlreadyExists(_)
                | Self::InteractionAlreadyExists(_)
                | Self::AlreadyFollowing
                | Self::EmailAlreadyExists
                | Self::UsernameAlreadyExists(_)
        )
    }
}
