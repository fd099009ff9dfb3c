//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateBlogRequest, CreateCommentRequest, FeaturedQuery, PaginationQuery, SearchQuery,
    TagsQuery, UpdateBlogRequest, UpdateCommentRequest,
};

pub use responses::{
    AuthorResponse, BlogListResponse, BlogMutationResponse, BlogResponse, BookmarkResponse,
    BookmarksResponse, CategoryResponse, CommentListResponse, CommentResponse,
    DeleteBlogResponse, FeaturedBlogsResponse, FollowStatusResponse, HealthChecks,
    HealthResponse, InteractionStatusResponse, LikeResponse, MessageResponse,
    ProfileBlogResponse, ProfileResponse, PublicUserResponse, ReadinessResponse, TagResponse,
    UserResponse, ViewResponse,
};
